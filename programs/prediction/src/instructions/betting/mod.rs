pub mod claim;
pub mod place_bet;

pub use claim::*;
pub use place_bet::*;

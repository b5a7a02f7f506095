pub mod bet;
pub mod config;
pub mod round;
pub mod user_ledger;

pub use bet::*;
pub use config::*;
pub use round::*;
pub use user_ledger::*;

pub mod admin;
pub mod betting;
pub mod round;

pub use admin::*;
pub use betting::*;
pub use round::*;

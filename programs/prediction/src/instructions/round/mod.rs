pub mod execute_round;
pub mod genesis_lock;
pub mod genesis_start;

pub use execute_round::*;
pub use genesis_lock::*;
pub use genesis_start::*;

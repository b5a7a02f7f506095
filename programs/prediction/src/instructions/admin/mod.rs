pub mod claim_treasury;
pub mod initialize;
pub mod pause;
pub mod recover_token;
pub mod update_config;
pub mod update_roles;

pub use claim_treasury::*;
pub use initialize::*;
pub use pause::*;
pub use recover_token::*;
pub use update_config::*;
pub use update_roles::*;

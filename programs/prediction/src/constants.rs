/// All oracle prices are rescaled to this fixed decimal exponent before use.
pub const PRICE_DECIMALS: i32 = 8;

/// Treasury fee cap, 10%.
pub const MAX_FEE_BPS: u16 = 1000;

pub const BPS_DENOMINATOR: u128 = 10_000;

/// A lock/close sub-step may run this many seconds before its scheduled time.
pub const EARLY_TOLERANCE_SECONDS: i64 = 5;

/// Capacity of the per-user epoch index account.
pub const MAX_TRACKED_EPOCHS: usize = 512;

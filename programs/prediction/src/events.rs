use anchor_lang::prelude::*;
use crate::state::bet::Position;

#[event]
pub struct EngineInitialized {
    pub owner: Pubkey,
    pub admin: Pubkey,
    pub operator: Pubkey,
    pub fee_bps: u16,
    pub interval_seconds: i64,
    pub buffer_seconds: i64,
}

#[event]
pub struct RoundStarted {
    pub epoch: u64,
    pub start_timestamp: i64,
    pub lock_timestamp: i64,
    pub close_timestamp: i64,
}

#[event]
pub struct RoundLocked {
    pub epoch: u64,
    pub lock_price: i64,
    pub oracle_timestamp: i64,
    pub total_amount: u64,
}

#[event]
pub struct RoundEnded {
    pub epoch: u64,
    pub close_price: i64,
    pub oracle_timestamp: i64,
}

#[event]
pub struct RewardsCalculated {
    pub epoch: u64,
    pub reward_base_amount: u64,
    pub reward_amount: u64,
    pub treasury_cut: u64,
}

#[event]
pub struct BetPlaced {
    pub epoch: u64,
    pub user: Pubkey,
    pub position: Position,
    pub amount: u64,
    pub new_bull_amount: u64,
    pub new_bear_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Claimed {
    pub user: Pubkey,
    pub epochs: Vec<u64>,
    pub amount: u64,
}

#[event]
pub struct TreasuryClaimed {
    pub admin: Pubkey,
    pub amount: u64,
}

#[event]
pub struct EnginePaused {
    pub current_epoch: u64,
}

#[event]
pub struct EngineUnpaused {
    pub current_epoch: u64,
}

#[event]
pub struct ConfigUpdated {
    pub fee_bps: u16,
    pub min_bet_amount: u64,
    pub interval_seconds: i64,
    pub buffer_seconds: i64,
    pub oracle_allowance_seconds: i64,
}

#[event]
pub struct TokenRecovered {
    pub mint: Pubkey,
    pub amount: u64,
}

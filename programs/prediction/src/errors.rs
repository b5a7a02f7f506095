use anchor_lang::prelude::*;

#[error_code]
pub enum PredictionError {
    #[msg("Engine is paused")]
    Paused,
    #[msg("Engine is not paused")]
    NotPaused,
    #[msg("Bet is not for the current epoch")]
    WrongEpoch,
    #[msg("Round is not open for betting")]
    NotBettable,
    #[msg("Bet below minimum stake")]
    BelowMinimum,
    #[msg("Account already bet this round")]
    AlreadyBet,
    #[msg("Oracle timestamp too far in the future")]
    OracleStale,
    #[msg("Oracle timestamp not newer than last consumed")]
    OracleReplay,
    #[msg("Price update does not match the configured feed")]
    OracleFeedMismatch,
    #[msg("Normalized oracle price is not positive")]
    InvalidPrice,
    #[msg("Too early for this transition")]
    TimingTooEarly,
    #[msg("Transition window has passed")]
    TimingTooLate,
    #[msg("Not claimable")]
    NotClaimable,
    #[msg("Not refundable")]
    NotRefundable,
    #[msg("Round rewards already computed")]
    AlreadySettled,
    #[msg("Round has not started")]
    RoundNotStarted,
    #[msg("Round has not closed yet")]
    RoundNotOver,
    #[msg("Round is not locked")]
    RoundNotLocked,
    #[msg("Genesis start already done")]
    GenesisAlreadyStarted,
    #[msg("Genesis lock already done")]
    GenesisAlreadyLocked,
    #[msg("Genesis bootstrap not complete")]
    GenesisNotReady,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid configuration value")]
    InvalidConfiguration,
    #[msg("Treasury is empty")]
    TreasuryEmpty,
    #[msg("User epoch index is full")]
    LedgerFull,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Remaining accounts do not match requested epochs")]
    InvalidRemainingAccounts,
    #[msg("Cannot recover the collateral mint")]
    CannotRecoverCollateral,
}

use anchor_lang::prelude::*;
use crate::errors::PredictionError;

/// Engine-wide state. One instance per deployment, one reference price.
#[account]
pub struct Config {
    pub owner: Pubkey,
    pub admin: Pubkey,
    pub operator: Pubkey,
    pub collateral_mint: Pubkey,
    pub oracle_feed_id: [u8; 32],
    pub interval_seconds: i64,
    pub buffer_seconds: i64,       // buffer_seconds < interval_seconds
    pub oracle_allowance_seconds: i64,
    pub min_bet_amount: u64,
    pub fee_bps: u16,              // <= 1000
    pub current_epoch: u64,
    /// Highest oracle publish time ever consumed. Monotonic.
    pub oracle_latest_timestamp: i64,
    /// Fees plus tie forfeitures, held in the vault until claimed.
    pub treasury_amount: u64,
    pub genesis_start_done: bool,
    pub genesis_lock_done: bool,
    pub paused: bool,
    pub bump: u8,
}

impl Config {
    // 8 (discriminator)
    // 32 * 4 (owner, admin, operator, collateral_mint)
    // 32 (oracle_feed_id)
    // 8 * 3 (interval, buffer, oracle_allowance)
    // 8 (min_bet) + 2 (fee_bps)
    // 8 (current_epoch) + 8 (oracle_latest_timestamp) + 8 (treasury_amount)
    // 1 + 1 + 1 (flags) + 1 (bump)
    pub const LEN: usize = 8 + 32 * 4 + 32 + 8 * 3 + 8 + 2 + 8 * 3 + 4;

    pub fn genesis_done(&self) -> bool {
        self.genesis_start_done && self.genesis_lock_done
    }

    /// Validates an oracle publish time against the freshness allowance and
    /// the anti-replay floor, then records it as consumed. Runs before the
    /// round sub-steps of a tick; an abort later in the same instruction
    /// rolls this back with everything else.
    pub fn consume_oracle(&mut self, publish_time: i64, now: i64) -> Result<()> {
        require!(
            publish_time <= now.saturating_add(self.oracle_allowance_seconds),
            PredictionError::OracleStale
        );
        require!(
            publish_time > self.oracle_latest_timestamp,
            PredictionError::OracleReplay
        );
        self.oracle_latest_timestamp = publish_time;
        Ok(())
    }

    pub fn suspend(&mut self) -> Result<()> {
        require!(!self.paused, PredictionError::Paused);
        self.paused = true;
        Ok(())
    }

    /// Resuming forces a fresh genesis bootstrap: both flags are cleared and
    /// the next ticks must be genesis_start_round / genesis_lock_round again.
    /// Rounds left unsettled across the pause age into the refund path.
    pub fn resume(&mut self) -> Result<()> {
        require!(self.paused, PredictionError::NotPaused);
        self.paused = false;
        self.genesis_start_done = false;
        self.genesis_lock_done = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            owner: Pubkey::default(),
            admin: Pubkey::default(),
            operator: Pubkey::default(),
            collateral_mint: Pubkey::default(),
            oracle_feed_id: [0u8; 32],
            interval_seconds: 300,
            buffer_seconds: 60,
            oracle_allowance_seconds: 30,
            min_bet_amount: 1_000,
            fee_bps: 300,
            current_epoch: 0,
            oracle_latest_timestamp: 0,
            treasury_amount: 0,
            genesis_start_done: false,
            genesis_lock_done: false,
            paused: false,
            bump: 255,
        }
    }

    #[test]
    fn consume_oracle_accepts_newer_timestamp() {
        let mut c = config();
        c.oracle_latest_timestamp = 1_000;
        assert!(c.consume_oracle(1_001, 1_005).is_ok());
        assert_eq!(c.oracle_latest_timestamp, 1_001);
    }

    #[test]
    fn consume_oracle_rejects_replay() {
        let mut c = config();
        c.oracle_latest_timestamp = 1_000;
        // Equal timestamp is a replay of the already-consumed sample.
        assert!(c.consume_oracle(1_000, 1_005).is_err());
        assert!(c.consume_oracle(999, 1_005).is_err());
        assert_eq!(c.oracle_latest_timestamp, 1_000);
    }

    #[test]
    fn consume_oracle_rejects_future_dated_sample() {
        let mut c = config();
        // Allowance is 30s; 31s ahead of now must fail.
        assert!(c.consume_oracle(1_031, 1_000).is_err());
        // Exactly at the allowance boundary passes.
        assert!(c.consume_oracle(1_030, 1_000).is_ok());
    }

    #[test]
    fn unpause_forces_re_genesis() {
        let mut c = config();
        c.genesis_start_done = true;
        c.genesis_lock_done = true;
        c.suspend().unwrap();
        assert!(c.paused);
        c.resume().unwrap();
        assert!(!c.paused);
        assert!(!c.genesis_start_done);
        assert!(!c.genesis_lock_done);
        assert!(!c.genesis_done());
    }

    #[test]
    fn pause_is_not_idempotent() {
        let mut c = config();
        c.suspend().unwrap();
        assert!(c.suspend().is_err());
        c.resume().unwrap();
        assert!(c.resume().is_err());
    }
}

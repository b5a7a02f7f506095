use anchor_lang::prelude::*;
use crate::constants::MAX_TRACKED_EPOCHS;
use crate::errors::PredictionError;

/// Append-only index of the epochs an account has bet in. Enumeration only;
/// entries are never removed or rewritten.
#[account]
pub struct UserRounds {
    pub user: Pubkey,
    pub epochs: Vec<u64>,
    pub bump: u8,
}

impl UserRounds {
    // 8 (discriminator) + 32 (user) + 4 + 8 * cap (epochs vec) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 4 + 8 * MAX_TRACKED_EPOCHS + 1;

    pub fn record(&mut self, epoch: u64) -> Result<()> {
        require!(self.epochs.len() < MAX_TRACKED_EPOCHS, PredictionError::LedgerFull);
        self.epochs.push(epoch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut ledger = UserRounds {
            user: Pubkey::default(),
            epochs: vec![],
            bump: 255,
        };
        ledger.record(3).unwrap();
        ledger.record(7).unwrap();
        assert_eq!(ledger.epochs, vec![3, 7]);
    }

    #[test]
    fn record_fails_when_full() {
        let mut ledger = UserRounds {
            user: Pubkey::default(),
            epochs: (0..MAX_TRACKED_EPOCHS as u64).collect(),
            bump: 255,
        };
        assert!(ledger.record(9999).is_err());
        assert_eq!(ledger.epochs.len(), MAX_TRACKED_EPOCHS);
    }
}

use anchor_lang::prelude::*;
use crate::constants::EARLY_TOLERANCE_SECONDS;
use crate::errors::PredictionError;
use crate::state::bet::{BetInfo, Position};
use crate::utils::math;

/// One betting cycle. The state is derived rather than stored:
/// `Bettable` while the lock price is unset and the betting window is open,
/// `Locked` once the lock price lands, `Settled` once rewards are computed,
/// `Expired` if the close window passes without a settle.
#[account]
pub struct Round {
    pub epoch: u64,
    pub start_timestamp: i64,
    pub lock_timestamp: i64,
    pub close_timestamp: i64,
    pub lock_price: Option<i64>,
    pub close_price: Option<i64>,
    pub lock_oracle_timestamp: Option<i64>,
    pub close_oracle_timestamp: Option<i64>,
    pub total_amount: u64,
    pub bull_amount: u64,
    pub bear_amount: u64,
    pub reward_base_amount: u64,
    pub reward_amount: u64,
    pub settled: bool,
    pub bump: u8,
}

impl Round {
    // 8 (discriminator) + 8 (epoch) + 8 * 3 (timestamps)
    // 9 * 4 (option prices and oracle timestamps)
    // 8 * 5 (amounts) + 1 (settled) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 8 * 3 + 9 * 4 + 8 * 5 + 1 + 1;

    pub fn open(&mut self, epoch: u64, now: i64, interval_seconds: i64, bump: u8) {
        self.epoch = epoch;
        self.start_timestamp = now;
        self.lock_timestamp = now + interval_seconds;
        self.close_timestamp = now + 2 * interval_seconds;
        self.bump = bump;
    }

    pub fn has_started(&self) -> bool {
        self.start_timestamp != 0
    }

    pub fn is_over(&self, now: i64) -> bool {
        self.has_started() && now > self.close_timestamp
    }

    pub fn is_bettable(&self, now: i64) -> bool {
        self.has_started()
            && self.lock_price.is_none()
            && now > self.start_timestamp
            && now < self.lock_timestamp
    }

    pub fn record_bet(&mut self, position: Position, amount: u64) -> Result<()> {
        self.total_amount = self
            .total_amount
            .checked_add(amount)
            .ok_or(PredictionError::MathOverflow)?;
        match position {
            Position::Bull => {
                self.bull_amount = self
                    .bull_amount
                    .checked_add(amount)
                    .ok_or(PredictionError::MathOverflow)?;
            }
            Position::Bear => {
                self.bear_amount = self
                    .bear_amount
                    .checked_add(amount)
                    .ok_or(PredictionError::MathOverflow)?;
            }
        }
        Ok(())
    }

    /// Captures the lock price. Valid only while the round is still awaiting
    /// its lock and `now` sits inside the lock window.
    pub fn lock(
        &mut self,
        price: i64,
        oracle_timestamp: i64,
        now: i64,
        buffer_seconds: i64,
    ) -> Result<()> {
        require!(self.has_started(), PredictionError::RoundNotStarted);
        require!(self.lock_price.is_none(), PredictionError::NotBettable);
        check_transition_window(now, self.lock_timestamp, buffer_seconds)?;
        self.lock_price = Some(price);
        self.lock_oracle_timestamp = Some(oracle_timestamp);
        Ok(())
    }

    /// Captures the close price. Valid only once locked, before settle, and
    /// inside the close window.
    pub fn close(
        &mut self,
        price: i64,
        oracle_timestamp: i64,
        now: i64,
        buffer_seconds: i64,
    ) -> Result<()> {
        require!(self.lock_price.is_some(), PredictionError::RoundNotLocked);
        require!(self.close_price.is_none(), PredictionError::AlreadySettled);
        check_transition_window(now, self.close_timestamp, buffer_seconds)?;
        self.close_price = Some(price);
        self.close_oracle_timestamp = Some(oracle_timestamp);
        Ok(())
    }

    /// Computes the reward pools exactly once and returns the treasury cut.
    pub fn settle(&mut self, fee_bps: u16) -> Result<u64> {
        require!(!self.settled, PredictionError::AlreadySettled);
        let lock_price = self.lock_price.ok_or(PredictionError::RoundNotLocked)?;
        let close_price = self.close_price.ok_or(PredictionError::RoundNotOver)?;

        let result = math::compute_round_result(
            lock_price,
            close_price,
            self.bull_amount,
            self.bear_amount,
            self.total_amount,
            fee_bps,
        )?;
        self.reward_base_amount = result.reward_base_amount;
        self.reward_amount = result.reward_amount;
        self.settled = true;
        Ok(result.treasury_cut)
    }

    /// Winning side, if the round settled with a price move. `None` on a tie
    /// or before settlement.
    pub fn winner(&self) -> Option<Position> {
        if !self.settled {
            return None;
        }
        match (self.lock_price, self.close_price) {
            (Some(lock), Some(close)) if close > lock => Some(Position::Bull),
            (Some(lock), Some(close)) if close < lock => Some(Position::Bear),
            _ => None,
        }
    }

    pub fn claimable(&self, bet: &BetInfo) -> bool {
        match self.winner() {
            Some(winner) => !bet.claimed && bet.amount > 0 && bet.position == winner,
            None => false,
        }
    }

    /// Refunds apply only to rounds that never settled, after the grace
    /// window on the close has lapsed.
    pub fn refundable(&self, bet: &BetInfo, now: i64, buffer_seconds: i64) -> bool {
        !self.settled
            && self.has_started()
            && !bet.claimed
            && bet.amount > 0
            && now > self.close_timestamp + buffer_seconds
    }

    pub fn payout(&self, bet: &BetInfo) -> Result<u64> {
        math::compute_payout(bet.amount, self.reward_amount, self.reward_base_amount)
    }
}

/// A transition may run at most `EARLY_TOLERANCE_SECONDS` before its
/// scheduled time and at most `buffer_seconds` after it.
pub fn check_transition_window(now: i64, scheduled: i64, buffer_seconds: i64) -> Result<()> {
    require!(
        now >= scheduled - EARLY_TOLERANCE_SECONDS,
        PredictionError::TimingTooEarly
    );
    require!(
        now <= scheduled + buffer_seconds,
        PredictionError::TimingTooLate
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(epoch: u64, start: i64, interval: i64) -> Round {
        let mut r = Round {
            epoch: 0,
            start_timestamp: 0,
            lock_timestamp: 0,
            close_timestamp: 0,
            lock_price: None,
            close_price: None,
            lock_oracle_timestamp: None,
            close_oracle_timestamp: None,
            total_amount: 0,
            bull_amount: 0,
            bear_amount: 0,
            reward_base_amount: 0,
            reward_amount: 0,
            settled: false,
            bump: 255,
        };
        r.open(epoch, start, interval, 255);
        r
    }

    fn bet(position: Position, amount: u64) -> BetInfo {
        BetInfo {
            user: Pubkey::default(),
            epoch: 0,
            position,
            amount,
            claimed: false,
            bump: 255,
        }
    }

    fn assert_err<T>(res: Result<T>, expected: PredictionError) {
        let expected: Error = expected.into();
        match res {
            Ok(_) => panic!("expected {expected:?}"),
            Err(e) => assert_eq!(e, expected),
        }
    }

    #[test]
    fn open_schedules_lock_and_close() {
        let r = round(1, 10, 60);
        assert_eq!(r.lock_timestamp, 70);
        assert_eq!(r.close_timestamp, 130);
        assert!(r.has_started());
    }

    #[test]
    fn betting_window_is_strictly_between_start_and_lock() {
        let r = round(1, 10, 60);
        assert!(!r.is_bettable(10));
        assert!(r.is_bettable(11));
        assert!(r.is_bettable(69));
        assert!(!r.is_bettable(70));
    }

    #[test]
    fn locked_round_is_not_bettable() {
        let mut r = round(1, 10, 60);
        r.lock(2_100, 68, 70, 30).unwrap();
        assert!(!r.is_bettable(40));
    }

    #[test]
    fn lock_rejects_outside_window() {
        let mut r = round(1, 10, 60);
        // lock_timestamp = 70, tolerance 5, buffer 30.
        assert_err(r.lock(2_100, 60, 64, 30), PredictionError::TimingTooEarly);
        assert_err(r.lock(2_100, 60, 101, 30), PredictionError::TimingTooLate);
        r.lock(2_100, 64, 65, 30).unwrap();
        assert_eq!(r.lock_price, Some(2_100));
        assert_eq!(r.lock_oracle_timestamp, Some(64));
    }

    #[test]
    fn lock_is_set_once() {
        let mut r = round(1, 10, 60);
        r.lock(2_100, 68, 70, 30).unwrap();
        assert_err(r.lock(2_200, 69, 71, 30), PredictionError::NotBettable);
        assert_eq!(r.lock_price, Some(2_100));
    }

    #[test]
    fn close_requires_lock_first() {
        let mut r = round(1, 10, 60);
        assert_err(r.close(2_050, 128, 130, 30), PredictionError::RoundNotLocked);
    }

    #[test]
    fn settle_runs_once_and_credits_treasury() {
        let mut r = round(1, 10, 60);
        r.record_bet(Position::Bull, 300).unwrap();
        r.record_bet(Position::Bear, 700).unwrap();
        r.lock(2_100, 68, 70, 30).unwrap();
        r.close(2_050, 128, 130, 30).unwrap();
        let cut = r.settle(300).unwrap();
        assert!(r.settled);
        assert_eq!(r.reward_base_amount, 700); // bear won
        assert_eq!(r.reward_amount + cut, r.total_amount);
        assert_err(r.settle(300), PredictionError::AlreadySettled);
    }

    #[test]
    fn tie_round_is_neither_claimable_nor_refundable() {
        let mut r = round(1, 10, 60);
        r.record_bet(Position::Bull, 400).unwrap();
        r.record_bet(Position::Bear, 600).unwrap();
        r.lock(2_100, 68, 70, 30).unwrap();
        r.close(2_100, 128, 130, 30).unwrap();
        let cut = r.settle(300).unwrap();
        assert_eq!(cut, 1_000); // whole pool forfeits
        assert_eq!(r.reward_amount, 0);
        let bull = bet(Position::Bull, 400);
        let bear = bet(Position::Bear, 600);
        assert!(!r.claimable(&bull));
        assert!(!r.claimable(&bear));
        // Settled, so the refund path never opens, however late it is.
        assert!(!r.refundable(&bull, 10_000, 30));
    }

    #[test]
    fn winner_side_claims_proportional_payout() {
        let mut r = round(1, 10, 60);
        r.record_bet(Position::Bull, 300).unwrap();
        r.record_bet(Position::Bear, 700).unwrap();
        r.lock(2_000, 68, 70, 30).unwrap();
        r.close(2_010, 128, 130, 30).unwrap();
        r.settle(300).unwrap();
        let winning = bet(Position::Bull, 300);
        let losing = bet(Position::Bear, 700);
        assert!(r.claimable(&winning));
        assert!(!r.claimable(&losing));
        assert_eq!(r.payout(&winning).unwrap(), 970);
    }

    #[test]
    fn claimed_bet_is_no_longer_claimable() {
        let mut r = round(1, 10, 60);
        r.record_bet(Position::Bull, 300).unwrap();
        r.lock(2_000, 68, 70, 30).unwrap();
        r.close(2_010, 128, 130, 30).unwrap();
        r.settle(0).unwrap();
        let mut b = bet(Position::Bull, 300);
        assert!(r.claimable(&b));
        b.claimed = true;
        assert!(!r.claimable(&b));
    }

    #[test]
    fn missed_close_becomes_refundable_after_grace() {
        let mut r = round(1, 10, 60);
        r.record_bet(Position::Bear, 500).unwrap();
        r.lock(2_000, 68, 70, 30).unwrap();
        // No close ever happens. close_timestamp = 130, buffer 30.
        let b = bet(Position::Bear, 500);
        assert!(!r.refundable(&b, 160, 30));
        assert!(r.refundable(&b, 161, 30));
        assert!(!r.claimable(&b));
        let mut claimed = b;
        claimed.claimed = true;
        assert!(!r.refundable(&claimed, 161, 30));
    }

    // The steady-state pipeline from the engine's reference scenario:
    // interval 60, buffer 120, genesis at t=10 and t=70, one advance at
    // t=190 whose single oracle sample locks round 2 and closes round 1.
    #[test]
    fn pipelined_advance_scenario() {
        let interval = 60;
        let buffer = 120;

        let mut round1 = round(1, 10, interval);
        assert_eq!(round1.lock_timestamp, 70);
        assert_eq!(round1.close_timestamp, 130);

        // genesis lock at t=70, price 2100: locks round 1, opens round 2.
        round1.lock(2_100, 69, 70, buffer).unwrap();
        let mut round2 = round(2, 70, interval);
        assert_eq!(round2.lock_timestamp, 130);
        assert_eq!(round2.close_timestamp, 190);

        // Bets land on round 2 at t=90.
        assert!(round2.is_bettable(90));
        round2.record_bet(Position::Bull, 250).unwrap();
        round2.record_bet(Position::Bear, 750).unwrap();

        // advance at t=190 with price 2050.
        let now = 190;
        let sample = (2_050, 189);
        round2.lock(sample.0, sample.1, now, buffer).unwrap();
        round1.close(sample.0, sample.1, now, buffer).unwrap();
        let cut = round1.settle(300).unwrap();
        assert_eq!(cut, 0); // nobody bet on round 1
        assert_eq!(round1.winner(), Some(Position::Bear)); // 2100 -> 2050
        let round3 = round(3, now, interval);
        assert_eq!(round3.epoch, 2 + 1);
        assert_eq!(round3.lock_timestamp, 250);
    }

    #[test]
    fn transition_window_boundaries() {
        assert!(check_transition_window(65, 70, 30).is_ok());
        assert!(check_transition_window(100, 70, 30).is_ok());
        assert_err(check_transition_window(64, 70, 30), PredictionError::TimingTooEarly);
        assert_err(check_transition_window(101, 70, 30), PredictionError::TimingTooLate);
    }
}

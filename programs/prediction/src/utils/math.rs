use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::PredictionError;

pub struct RoundResult {
    /// Winning side's pool; denominator of every payout. 0 on a tie.
    pub reward_base_amount: u64,
    /// Distributable pool after the treasury cut. 0 on a tie.
    pub reward_amount: u64,
    pub treasury_cut: u64,
}

/// Pari-mutuel settlement. The whole pot is split into a distributable pool
/// and a treasury cut such that `reward_amount + treasury_cut == total`
/// exactly. On a tie there are no winners and the full pot forfeits to the
/// treasury.
pub fn compute_round_result(
    lock_price: i64,
    close_price: i64,
    bull_amount: u64,
    bear_amount: u64,
    total_amount: u64,
    fee_bps: u16,
) -> Result<RoundResult> {
    if close_price == lock_price {
        return Ok(RoundResult {
            reward_base_amount: 0,
            reward_amount: 0,
            treasury_cut: total_amount,
        });
    }

    let reward_base_amount = if close_price > lock_price {
        bull_amount
    } else {
        bear_amount
    };

    let treasury_cut = (total_amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(PredictionError::MathOverflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(PredictionError::MathOverflow)? as u64;
    let reward_amount = total_amount
        .checked_sub(treasury_cut)
        .ok_or(PredictionError::MathOverflow)?;

    Ok(RoundResult {
        reward_base_amount,
        reward_amount,
        treasury_cut,
    })
}

/// Winner payout: `stake * reward_amount / reward_base_amount`, floored.
pub fn compute_payout(stake: u64, reward_amount: u64, reward_base_amount: u64) -> Result<u64> {
    require!(reward_base_amount > 0, PredictionError::NotClaimable);
    let payout = (stake as u128)
        .checked_mul(reward_amount as u128)
        .ok_or(PredictionError::MathOverflow)?
        .checked_div(reward_base_amount as u128)
        .ok_or(PredictionError::MathOverflow)?;
    u64::try_from(payout).map_err(|_| PredictionError::MathOverflow.into())
}

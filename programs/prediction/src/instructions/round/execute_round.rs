use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use crate::errors::PredictionError;
use crate::events::{RewardsCalculated, RoundEnded, RoundLocked, RoundStarted};
use crate::state::{Config, Round};
use crate::utils::oracle;

#[derive(Accounts)]
pub struct ExecuteRound<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.operator == operator.key() @ PredictionError::Unauthorized,
        constraint = config.genesis_done() @ PredictionError::GenesisNotReady,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [b"round", config.current_epoch.to_le_bytes().as_ref()],
        bump = current_round.bump,
    )]
    pub current_round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [b"round", (config.current_epoch - 1).to_le_bytes().as_ref()],
        bump = previous_round.bump,
    )]
    pub previous_round: Account<'info, Round>,

    #[account(
        init,
        seeds = [b"round", (config.current_epoch + 1).to_le_bytes().as_ref()],
        bump,
        payer = operator,
        space = Round::LEN
    )]
    pub next_round: Account<'info, Round>,

    pub price_update: Account<'info, PriceUpdateV2>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Steady-state tick. One oracle sample both locks the current round and
/// closes the previous one; the previous round is then settled and its
/// treasury cut booked, and the next round opens. Any failed guard aborts
/// the whole instruction, leaving every round untouched until the next tick.
pub fn process_execute_round(ctx: Context<ExecuteRound>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(!config.paused, PredictionError::Paused);

    let now = Clock::get()?.unix_timestamp;
    let (publish_time, price) =
        oracle::read_validated_price(&ctx.accounts.price_update, &config.oracle_feed_id)?;
    config.consume_oracle(publish_time, now)?;

    let current_round = &mut ctx.accounts.current_round;
    current_round.lock(price, publish_time, now, config.buffer_seconds)?;

    let previous_round = &mut ctx.accounts.previous_round;
    Round::close(previous_round, price, publish_time, now, config.buffer_seconds)?;
    let treasury_cut = previous_round.settle(config.fee_bps)?;
    config.treasury_amount = config
        .treasury_amount
        .checked_add(treasury_cut)
        .ok_or(PredictionError::MathOverflow)?;

    let next_epoch = config
        .current_epoch
        .checked_add(1)
        .ok_or(PredictionError::MathOverflow)?;
    let next_round = &mut ctx.accounts.next_round;
    next_round.open(next_epoch, now, config.interval_seconds, ctx.bumps.next_round);
    config.current_epoch = next_epoch;

    emit!(RoundLocked {
        epoch: current_round.epoch,
        lock_price: price,
        oracle_timestamp: publish_time,
        total_amount: current_round.total_amount,
    });
    emit!(RoundEnded {
        epoch: previous_round.epoch,
        close_price: price,
        oracle_timestamp: publish_time,
    });
    emit!(RewardsCalculated {
        epoch: previous_round.epoch,
        reward_base_amount: previous_round.reward_base_amount,
        reward_amount: previous_round.reward_amount,
        treasury_cut,
    });
    emit!(RoundStarted {
        epoch: next_epoch,
        start_timestamp: next_round.start_timestamp,
        lock_timestamp: next_round.lock_timestamp,
        close_timestamp: next_round.close_timestamp,
    });

    Ok(())
}

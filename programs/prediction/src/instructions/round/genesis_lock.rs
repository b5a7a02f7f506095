use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use crate::errors::PredictionError;
use crate::events::{RoundLocked, RoundStarted};
use crate::state::{Config, Round};
use crate::utils::oracle;

#[derive(Accounts)]
pub struct GenesisLockRound<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.operator == operator.key() @ PredictionError::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [b"round", config.current_epoch.to_le_bytes().as_ref()],
        bump = current_round.bump,
    )]
    pub current_round: Account<'info, Round>,

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

/// Second bootstrap step: locks the genesis round with one oracle reading
/// and opens its successor. There is no previous round, so the close and
/// settle sub-steps are skipped exactly once.
pub fn process_genesis_lock_round(ctx: Context<GenesisLockRound>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(!config.paused, PredictionError::Paused);
    require!(config.genesis_start_done, PredictionError::GenesisNotReady);
    require!(
        !config.genesis_lock_done,
        PredictionError::GenesisAlreadyLocked
    );

    let now = Clock::get()?.unix_timestamp;
    let (publish_time, price) =
        oracle::read_validated_price(&ctx.accounts.price_update, &config.oracle_feed_id)?;
    config.consume_oracle(publish_time, now)?;

    let current_round = &mut ctx.accounts.current_round;
    current_round.lock(price, publish_time, now, config.buffer_seconds)?;

    let next_epoch = config
        .current_epoch
        .checked_add(1)
        .ok_or(PredictionError::MathOverflow)?;
    let next_round = &mut ctx.accounts.next_round;
    next_round.open(next_epoch, now, config.interval_seconds, ctx.bumps.next_round);
    config.current_epoch = next_epoch;
    config.genesis_lock_done = true;

    emit!(RoundLocked {
        epoch: current_round.epoch,
        lock_price: price,
        oracle_timestamp: publish_time,
        total_amount: current_round.total_amount,
    });
    emit!(RoundStarted {
        epoch: next_epoch,
        start_timestamp: next_round.start_timestamp,
        lock_timestamp: next_round.lock_timestamp,
        close_timestamp: next_round.close_timestamp,
    });

    Ok(())
}

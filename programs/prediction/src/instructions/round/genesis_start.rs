use anchor_lang::prelude::*;
use crate::errors::PredictionError;
use crate::events::RoundStarted;
use crate::state::{Config, Round};

#[derive(Accounts)]
pub struct GenesisStartRound<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.operator == operator.key() @ PredictionError::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        seeds = [b"round", (config.current_epoch + 1).to_le_bytes().as_ref()],
        bump,
        payer = operator,
        space = Round::LEN
    )]
    pub round: Account<'info, Round>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// First bootstrap step: opens the first round of a genesis cycle. There is
/// no prior round to close, so this is the only start that runs alone.
pub fn process_genesis_start_round(ctx: Context<GenesisStartRound>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(!config.paused, PredictionError::Paused);
    require!(
        !config.genesis_start_done,
        PredictionError::GenesisAlreadyStarted
    );

    let now = Clock::get()?.unix_timestamp;
    let epoch = config
        .current_epoch
        .checked_add(1)
        .ok_or(PredictionError::MathOverflow)?;

    let round = &mut ctx.accounts.round;
    round.open(epoch, now, config.interval_seconds, ctx.bumps.round);
    config.current_epoch = epoch;
    config.genesis_start_done = true;

    emit!(RoundStarted {
        epoch,
        start_timestamp: round.start_timestamp,
        lock_timestamp: round.lock_timestamp,
        close_timestamp: round.close_timestamp,
    });

    Ok(())
}

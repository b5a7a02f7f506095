use anchor_lang::prelude::*;
use crate::constants::MAX_FEE_BPS;
use crate::errors::PredictionError;
use crate::events::ConfigUpdated;
use crate::state::Config;

/// Configuration changes are only legal while the engine is paused, so a
/// running round pipeline never sees its parameters move under it.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.admin == admin.key() @ PredictionError::Unauthorized,
        constraint = config.paused @ PredictionError::NotPaused,
    )]
    pub config: Account<'info, Config>,
    pub admin: Signer<'info>,
}

fn emit_config(config: &Config) {
    emit!(ConfigUpdated {
        fee_bps: config.fee_bps,
        min_bet_amount: config.min_bet_amount,
        interval_seconds: config.interval_seconds,
        buffer_seconds: config.buffer_seconds,
        oracle_allowance_seconds: config.oracle_allowance_seconds,
    });
}

pub fn process_set_fee_bps(ctx: Context<UpdateConfig>, fee_bps: u16) -> Result<()> {
    require!(fee_bps <= MAX_FEE_BPS, PredictionError::InvalidConfiguration);
    ctx.accounts.config.fee_bps = fee_bps;
    emit_config(&ctx.accounts.config);
    Ok(())
}

pub fn process_set_min_bet_amount(ctx: Context<UpdateConfig>, min_bet_amount: u64) -> Result<()> {
    require!(min_bet_amount > 0, PredictionError::InvalidConfiguration);
    ctx.accounts.config.min_bet_amount = min_bet_amount;
    emit_config(&ctx.accounts.config);
    Ok(())
}

pub fn process_set_interval_and_buffer(
    ctx: Context<UpdateConfig>,
    interval_seconds: i64,
    buffer_seconds: i64,
) -> Result<()> {
    require!(interval_seconds > 0, PredictionError::InvalidConfiguration);
    require!(
        buffer_seconds > 0 && buffer_seconds < interval_seconds,
        PredictionError::InvalidConfiguration
    );
    let config = &mut ctx.accounts.config;
    config.interval_seconds = interval_seconds;
    config.buffer_seconds = buffer_seconds;
    emit_config(config);
    Ok(())
}

pub fn process_set_oracle_allowance(
    ctx: Context<UpdateConfig>,
    oracle_allowance_seconds: i64,
) -> Result<()> {
    require!(
        oracle_allowance_seconds >= 0,
        PredictionError::InvalidConfiguration
    );
    ctx.accounts.config.oracle_allowance_seconds = oracle_allowance_seconds;
    emit_config(&ctx.accounts.config);
    Ok(())
}

pub fn process_set_oracle_feed(ctx: Context<UpdateConfig>, feed_id: [u8; 32]) -> Result<()> {
    require!(feed_id != [0u8; 32], PredictionError::InvalidConfiguration);
    ctx.accounts.config.oracle_feed_id = feed_id;
    emit_config(&ctx.accounts.config);
    Ok(())
}

use anchor_lang::prelude::*;
use crate::errors::PredictionError;
use crate::events::{EnginePaused, EngineUnpaused};
use crate::state::Config;

#[derive(Accounts)]
pub struct EngineAdmin<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.admin == admin.key() @ PredictionError::Unauthorized
    )]
    pub config: Account<'info, Config>,
    pub admin: Signer<'info>,
}

pub fn process_pause(ctx: Context<EngineAdmin>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.suspend()?;
    emit!(EnginePaused {
        current_epoch: config.current_epoch,
    });
    Ok(())
}

/// Resuming clears both genesis flags: every unpause is followed by a full
/// genesis bootstrap at fresh epochs. Rounds stranded by the pause settle
/// through the refund path once their grace window lapses.
pub fn process_unpause(ctx: Context<EngineAdmin>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.resume()?;
    emit!(EngineUnpaused {
        current_epoch: config.current_epoch,
    });
    Ok(())
}

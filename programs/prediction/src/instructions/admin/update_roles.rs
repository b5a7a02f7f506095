use anchor_lang::prelude::*;
use crate::errors::PredictionError;
use crate::state::Config;

#[derive(Accounts)]
pub struct SetOperator<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.admin == admin.key() @ PredictionError::Unauthorized
    )]
    pub config: Account<'info, Config>,
    pub admin: Signer<'info>,
    /// CHECK: Stored as the new operator authority; any address is valid.
    pub new_operator: AccountInfo<'info>,
}

pub fn process_set_operator(ctx: Context<SetOperator>) -> Result<()> {
    ctx.accounts.config.operator = ctx.accounts.new_operator.key();
    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.owner == owner.key() @ PredictionError::Unauthorized
    )]
    pub config: Account<'info, Config>,
    pub owner: Signer<'info>,
    /// CHECK: Stored as the new admin authority; any address is valid.
    pub new_admin: AccountInfo<'info>,
}

pub fn process_set_admin(ctx: Context<SetAdmin>) -> Result<()> {
    ctx.accounts.config.admin = ctx.accounts.new_admin.key();
    Ok(())
}

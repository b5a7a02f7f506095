use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::PredictionError;
use crate::events::TokenRecovered;
use crate::state::Config;

/// Owner escape hatch for SPL tokens mistakenly sent to an account the
/// engine controls. The collateral mint is excluded, so escrowed wagers and
/// the treasury can never leave through here.
#[derive(Accounts)]
pub struct RecoverToken<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.owner == owner.key() @ PredictionError::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        constraint = stray_account.owner == config.key() @ PredictionError::Unauthorized,
        constraint = stray_account.mint != config.collateral_mint @ PredictionError::CannotRecoverCollateral,
    )]
    pub stray_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == stray_account.mint @ PredictionError::InvalidConfiguration,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_recover_token(ctx: Context<RecoverToken>) -> Result<()> {
    let amount = ctx.accounts.stray_account.amount;

    let seeds = &[b"config".as_ref(), &[ctx.accounts.config.bump]];
    let signer = &[&seeds[..]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.stray_account.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer,
        ),
        amount,
    )?;

    emit!(TokenRecovered {
        mint: ctx.accounts.stray_account.mint,
        amount,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::PredictionError;
use crate::events::TreasuryClaimed;
use crate::state::Config;

#[derive(Accounts)]
pub struct ClaimTreasury<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.admin == admin.key() @ PredictionError::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [b"vault"],
        bump,
        token::mint = config.collateral_mint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = config.collateral_mint,
        associated_token::authority = admin,
    )]
    pub admin_ata: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_claim_treasury(ctx: Context<ClaimTreasury>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let amount = config.treasury_amount;
    require!(amount > 0, PredictionError::TreasuryEmpty);

    // Debit the ledger before moving value out of the vault.
    config.treasury_amount = 0;

    let seeds = &[b"config".as_ref(), &[config.bump]];
    let signer = &[&seeds[..]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_ata.to_account_info(),
                authority: config.to_account_info(),
            },
            signer,
        ),
        amount,
    )?;

    emit!(TreasuryClaimed {
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}

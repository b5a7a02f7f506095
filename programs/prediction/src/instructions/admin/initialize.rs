use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::MAX_FEE_BPS;
use crate::errors::PredictionError;
use crate::events::EngineInitialized;
use crate::state::Config;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeParams {
    pub admin: Pubkey,
    pub operator: Pubkey,
    pub oracle_feed_id: [u8; 32],
    pub interval_seconds: i64,
    pub buffer_seconds: i64,
    pub oracle_allowance_seconds: i64,
    pub min_bet_amount: u64,
    pub fee_bps: u16,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        seeds = [b"config"],
        bump,
        payer = owner,
        space = Config::LEN
    )]
    pub config: Account<'info, Config>,

    /// Single escrow vault for all stakes and the treasury balance.
    #[account(
        init,
        seeds = [b"vault"],
        bump,
        payer = owner,
        token::mint = collateral_mint,
        token::authority = config,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub collateral_mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn process_initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    require!(params.fee_bps <= MAX_FEE_BPS, PredictionError::InvalidConfiguration);
    require!(params.interval_seconds > 0, PredictionError::InvalidConfiguration);
    require!(
        params.buffer_seconds > 0 && params.buffer_seconds < params.interval_seconds,
        PredictionError::InvalidConfiguration
    );
    require!(params.min_bet_amount > 0, PredictionError::InvalidConfiguration);
    require!(
        params.oracle_allowance_seconds >= 0,
        PredictionError::InvalidConfiguration
    );

    let config = &mut ctx.accounts.config;
    config.owner = ctx.accounts.owner.key();
    config.admin = params.admin;
    config.operator = params.operator;
    config.collateral_mint = ctx.accounts.collateral_mint.key();
    config.oracle_feed_id = params.oracle_feed_id;
    config.interval_seconds = params.interval_seconds;
    config.buffer_seconds = params.buffer_seconds;
    config.oracle_allowance_seconds = params.oracle_allowance_seconds;
    config.min_bet_amount = params.min_bet_amount;
    config.fee_bps = params.fee_bps;
    config.current_epoch = 0;
    config.oracle_latest_timestamp = 0;
    config.treasury_amount = 0;
    config.genesis_start_done = false;
    config.genesis_lock_done = false;
    config.paused = false;
    config.bump = ctx.bumps.config;

    emit!(EngineInitialized {
        owner: config.owner,
        admin: config.admin,
        operator: config.operator,
        fee_bps: config.fee_bps,
        interval_seconds: config.interval_seconds,
        buffer_seconds: config.buffer_seconds,
    });

    Ok(())
}

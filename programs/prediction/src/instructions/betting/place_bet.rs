use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::PredictionError;
use crate::events::BetPlaced;
use crate::state::{BetInfo, Config, Position, Round, UserRounds};

#[derive(Accounts)]
#[instruction(epoch: u64)]
pub struct PlaceBet<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [b"round", epoch.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    #[account(
        init_if_needed,
        seeds = [b"bet", epoch.to_le_bytes().as_ref(), user.key().as_ref()],
        bump,
        payer = user,
        space = BetInfo::LEN
    )]
    pub bet_info: Box<Account<'info, BetInfo>>,

    #[account(
        init_if_needed,
        seeds = [b"user_rounds", user.key().as_ref()],
        bump,
        payer = user,
        space = UserRounds::LEN
    )]
    pub user_rounds: Box<Account<'info, UserRounds>>,

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
        associated_token::authority = user,
    )]
    pub user_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn process_place_bet(
    ctx: Context<PlaceBet>,
    epoch: u64,
    position: Position,
    amount: u64,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    let clock = Clock::get()?;

    require!(!config.paused, PredictionError::Paused);
    require!(epoch == config.current_epoch, PredictionError::WrongEpoch);
    require!(
        round.is_bettable(clock.unix_timestamp),
        PredictionError::NotBettable
    );
    require!(amount >= config.min_bet_amount, PredictionError::BelowMinimum);
    // A freshly-initialized BetInfo has zero amount; anything else means the
    // account already holds this round's wager.
    require!(ctx.accounts.bet_info.amount == 0, PredictionError::AlreadyBet);

    // Escrow the stake for the round's lifetime.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_ata.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    round.record_bet(position, amount)?;

    let bet_info = &mut ctx.accounts.bet_info;
    bet_info.user = ctx.accounts.user.key();
    bet_info.epoch = epoch;
    bet_info.position = position;
    bet_info.amount = amount;
    bet_info.claimed = false;
    bet_info.bump = ctx.bumps.bet_info;

    let user_rounds = &mut ctx.accounts.user_rounds;
    if user_rounds.user == Pubkey::default() {
        user_rounds.user = ctx.accounts.user.key();
        user_rounds.bump = ctx.bumps.user_rounds;
    }
    user_rounds.record(epoch)?;

    emit!(BetPlaced {
        epoch,
        user: ctx.accounts.user.key(),
        position,
        amount,
        new_bull_amount: round.bull_amount,
        new_bear_amount: round.bear_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::PredictionError;
use crate::events::Claimed;
use crate::state::{BetInfo, Config, Round};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

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

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    // Remaining accounts: one (round, bet_info) writable pair per requested
    // epoch, in the same order as `epochs`.
}

/// Pays out winnings for settled rounds and refunds for expired ones in a
/// single call. Every requested epoch must be eligible or the whole call
/// fails; every bet is marked claimed and written back before the one
/// outbound transfer of the summed total.
pub fn process_claim<'info>(
    ctx: Context<'_, '_, 'info, 'info, Claim<'info>>,
    epochs: Vec<u64>,
) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(!config.paused, PredictionError::Paused);

    let remaining = ctx.remaining_accounts;
    require!(
        remaining.len() == epochs.len() * 2,
        PredictionError::InvalidRemainingAccounts
    );

    let now = Clock::get()?.unix_timestamp;
    let user_key = ctx.accounts.user.key();
    let mut total: u64 = 0;

    for (i, &epoch) in epochs.iter().enumerate() {
        let round_info = &remaining[i * 2];
        let bet_info_ai = &remaining[i * 2 + 1];

        let (round_pda, _) = Pubkey::find_program_address(
            &[b"round", epoch.to_le_bytes().as_ref()],
            ctx.program_id,
        );
        require_keys_eq!(
            round_info.key(),
            round_pda,
            PredictionError::InvalidRemainingAccounts
        );
        let (bet_pda, _) = Pubkey::find_program_address(
            &[b"bet", epoch.to_le_bytes().as_ref(), user_key.as_ref()],
            ctx.program_id,
        );
        require_keys_eq!(
            bet_info_ai.key(),
            bet_pda,
            PredictionError::InvalidRemainingAccounts
        );

        let round: Account<Round> = Account::try_from(round_info)?;
        let mut bet: Account<BetInfo> = Account::try_from(bet_info_ai)?;
        require_keys_eq!(bet.user, user_key, PredictionError::Unauthorized);
        require!(round.has_started(), PredictionError::RoundNotStarted);
        require!(round.is_over(now), PredictionError::RoundNotOver);

        let amount = if round.settled {
            require!(round.claimable(&bet), PredictionError::NotClaimable);
            round.payout(&bet)?
        } else {
            require!(
                round.refundable(&bet, now, config.buffer_seconds),
                PredictionError::NotRefundable
            );
            bet.amount
        };

        // Flip the flag and persist it before any value moves, so a repeated
        // epoch in the same call (or any reentry) reads claimed = true.
        bet.claimed = true;
        bet.exit(ctx.program_id)?;

        total = total
            .checked_add(amount)
            .ok_or(PredictionError::MathOverflow)?;
    }

    if total > 0 {
        let seeds = &[b"config".as_ref(), &[config.bump]];
        let signer = &[&seeds[..]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.user_ata.to_account_info(),
                    authority: config.to_account_info(),
                },
                signer,
            ),
            total,
        )?;
    }

    emit!(Claimed {
        user: user_key,
        epochs,
        amount: total,
    });

    Ok(())
}

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::bet::Position;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod prediction {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::admin::initialize::process_initialize(ctx, params)
    }

    pub fn genesis_start_round(ctx: Context<GenesisStartRound>) -> Result<()> {
        instructions::round::genesis_start::process_genesis_start_round(ctx)
    }

    pub fn genesis_lock_round(ctx: Context<GenesisLockRound>) -> Result<()> {
        instructions::round::genesis_lock::process_genesis_lock_round(ctx)
    }

    pub fn execute_round(ctx: Context<ExecuteRound>) -> Result<()> {
        instructions::round::execute_round::process_execute_round(ctx)
    }

    pub fn place_bet(
        ctx: Context<PlaceBet>,
        epoch: u64,
        position: Position,
        amount: u64,
    ) -> Result<()> {
        instructions::betting::place_bet::process_place_bet(ctx, epoch, position, amount)
    }

    pub fn claim<'info>(
        ctx: Context<'_, '_, 'info, 'info, Claim<'info>>,
        epochs: Vec<u64>,
    ) -> Result<()> {
        instructions::betting::claim::process_claim(ctx, epochs)
    }

    pub fn pause(ctx: Context<EngineAdmin>) -> Result<()> {
        instructions::admin::pause::process_pause(ctx)
    }

    pub fn unpause(ctx: Context<EngineAdmin>) -> Result<()> {
        instructions::admin::pause::process_unpause(ctx)
    }

    pub fn set_fee_bps(ctx: Context<UpdateConfig>, fee_bps: u16) -> Result<()> {
        instructions::admin::update_config::process_set_fee_bps(ctx, fee_bps)
    }

    pub fn set_min_bet_amount(ctx: Context<UpdateConfig>, min_bet_amount: u64) -> Result<()> {
        instructions::admin::update_config::process_set_min_bet_amount(ctx, min_bet_amount)
    }

    pub fn set_interval_and_buffer(
        ctx: Context<UpdateConfig>,
        interval_seconds: i64,
        buffer_seconds: i64,
    ) -> Result<()> {
        instructions::admin::update_config::process_set_interval_and_buffer(
            ctx,
            interval_seconds,
            buffer_seconds,
        )
    }

    pub fn set_oracle_allowance(
        ctx: Context<UpdateConfig>,
        oracle_allowance_seconds: i64,
    ) -> Result<()> {
        instructions::admin::update_config::process_set_oracle_allowance(
            ctx,
            oracle_allowance_seconds,
        )
    }

    pub fn set_oracle_feed(ctx: Context<UpdateConfig>, feed_id: [u8; 32]) -> Result<()> {
        instructions::admin::update_config::process_set_oracle_feed(ctx, feed_id)
    }

    pub fn set_operator(ctx: Context<SetOperator>) -> Result<()> {
        instructions::admin::update_roles::process_set_operator(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>) -> Result<()> {
        instructions::admin::update_roles::process_set_admin(ctx)
    }

    pub fn claim_treasury(ctx: Context<ClaimTreasury>) -> Result<()> {
        instructions::admin::claim_treasury::process_claim_treasury(ctx)
    }

    pub fn recover_token(ctx: Context<RecoverToken>) -> Result<()> {
        instructions::admin::recover_token::process_recover_token(ctx)
    }
}

use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum Position {
    Bull,
    Bear,
}

/// One wager. PDA seeds `[b"bet", epoch, user]` make the
/// one-bet-per-account-per-round rule an addressing fact.
#[account]
pub struct BetInfo {
    pub user: Pubkey,
    pub epoch: u64,
    pub position: Position,
    pub amount: u64,
    pub claimed: bool,
    pub bump: u8,
}

impl BetInfo {
    // 8 (discriminator) + 32 (user) + 8 (epoch) + 1 (position)
    // 8 (amount) + 1 (claimed) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 8 + 1 + 8 + 1 + 1;
}

//! Participant account definition

use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[account]
pub struct User {
    /// The participant's signing key
    pub authority: Pubkey,
    /// Display name, fixed at registration
    pub name: String,
    /// Virtual wallet balance
    pub wallet: u64,
    pub is_team_member: bool,
    /// Set once the initial wallet amount has been credited
    pub has_received_wallet: bool,
    pub registered_at: i64,
    /// PDA bump
    pub bump: u8,
}

impl User {
    pub const MAX_NAME_LEN: usize = 64;
    pub const INIT_SPACE: usize = 32 + 4 + Self::MAX_NAME_LEN + 8 + 1 + 1 + 8 + 1;

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.wallet = self
            .wallet
            .checked_add(amount)
            .ok_or(error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.wallet, ErrorCode::InsufficientFunds);
        self.wallet -= amount;
        Ok(())
    }
}

//! Project account definition with its embedded bid ledger

use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::User;

#[account]
pub struct Project {
    pub name: String,
    pub description: String,
    /// One entry per bidder; insertion order carries no meaning, display
    /// order is derived by sorting on amount
    pub bids: Vec<BidEntry>,
    pub created_at: i64,
    /// Position in creation order, also the PDA seed
    pub index: u32,
    /// PDA bump
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq)]
pub struct BidEntry {
    pub bidder: Pubkey,
    /// Display name captured at bid time
    pub bidder_name: String,
    pub amount: u64,
    pub placed_at: i64,
    /// Role captured at bid time; not updated when the role changes later
    pub is_team_member: bool,
}

impl BidEntry {
    pub const SPACE: usize = 32 + 4 + User::MAX_NAME_LEN + 8 + 8 + 1;
}

impl Project {
    pub const MAX_NAME_LEN: usize = 64;
    pub const MAX_DESCRIPTION_LEN: usize = 256;
    pub const MAX_BIDS: usize = 64;
    pub const INIT_SPACE: usize = 4
        + Self::MAX_NAME_LEN
        + 4
        + Self::MAX_DESCRIPTION_LEN
        + 4
        + Self::MAX_BIDS * BidEntry::SPACE
        + 8
        + 4
        + 1;

    pub fn find_bid(&self, bidder: &Pubkey) -> Option<&BidEntry> {
        self.bids.iter().find(|bid| bid.bidder == *bidder)
    }

    /// Insert the entry, or replace this bidder's existing entry in place.
    /// Returns the amount of the replaced bid, if any. A bidder never holds
    /// two entries on the same project.
    pub fn upsert_bid(&mut self, entry: BidEntry) -> Result<Option<u64>> {
        if let Some(existing) = self.bids.iter_mut().find(|bid| bid.bidder == entry.bidder) {
            let previous_amount = existing.amount;
            *existing = entry;
            Ok(Some(previous_amount))
        } else {
            require!(self.bids.len() < Self::MAX_BIDS, ErrorCode::BidLedgerFull);
            self.bids.push(entry);
            Ok(None)
        }
    }

    /// Remove this bidder's entry and return its amount for refunding.
    /// Returns None when the bidder holds no entry.
    pub fn remove_bid(&mut self, bidder: &Pubkey) -> Option<u64> {
        let position = self.bids.iter().position(|bid| bid.bidder == *bidder)?;
        Some(self.bids.remove(position).amount)
    }
}

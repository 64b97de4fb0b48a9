//! Shared event state account definition

use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::ErrorCode;

#[account]
pub struct EventState {
    /// The event organizer; the only key allowed to run admin instructions
    pub admin: Pubkey,
    pub initialized: bool,
    /// Whether new users may currently register
    pub registration_open: bool,
    /// Unix timestamp after which registration auto-closes (set on open)
    pub registration_expires_at: Option<i64>,
    /// The project currently being pitched, if any
    pub current_pitch: Option<Pubkey>,
    /// Projector flag: show the final leaderboard instead of the live view
    pub show_final_leaderboard: bool,
    /// Budget parameters of the most recent wallet distribution
    pub total_budget: u64,
    pub team_share_bps: u64,
    /// Live roster counters, maintained by register/toggle/delete
    pub team_count: u32,
    pub attendee_count: u32,
    /// Next project index, used as the project PDA seed
    pub projects_created: u32,
    /// PDA bump
    pub bump: u8,
}

impl EventState {
    pub const INIT_SPACE: usize = 32 + 1 + 1 + (1 + 8) + (1 + 32) + 1 + 8 + 8 + 4 + 4 + 4 + 1;

    /// Whether the registration window has lapsed at the given timestamp.
    pub fn registration_expired(&self, now: i64) -> bool {
        matches!(self.registration_expires_at, Some(expires_at) if now >= expires_at)
    }

    pub fn team_pool(&self) -> Result<u64> {
        let scaled = self
            .total_budget
            .checked_mul(self.team_share_bps)
            .ok_or(error!(ErrorCode::MathOverflow))?;
        Ok(scaled / BPS_DENOMINATOR)
    }

    pub fn attendee_pool(&self) -> Result<u64> {
        let scaled = self
            .total_budget
            .checked_mul(BPS_DENOMINATOR - self.team_share_bps)
            .ok_or(error!(ErrorCode::MathOverflow))?;
        Ok(scaled / BPS_DENOMINATOR)
    }

    /// Per-capita share of a pool, rounding down. The remainder is not
    /// distributed; an empty group allocates nothing.
    pub fn per_capita(pool: u64, count: u32) -> u64 {
        if count == 0 {
            0
        } else {
            pool / count as u64
        }
    }

    /// The amount one member of the given group receives under the stored
    /// budget parameters and the current roster counts.
    pub fn wallet_allocation(&self, is_team_member: bool) -> Result<u64> {
        if is_team_member {
            Ok(Self::per_capita(self.team_pool()?, self.team_count))
        } else {
            Ok(Self::per_capita(self.attendee_pool()?, self.attendee_count))
        }
    }
}

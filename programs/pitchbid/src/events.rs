//! Emitted on every mutation so clients can re-render live state.

use anchor_lang::prelude::*;

#[event]
pub struct RegistrationOpened {
    pub expires_at: i64,
}

#[event]
pub struct RegistrationClosed {
    /// True when the window lapsed rather than being closed by the admin.
    pub expired: bool,
}

#[event]
pub struct UserRegistered {
    pub user: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub is_team_member: bool,
}

#[event]
pub struct ProjectCreated {
    pub project: Pubkey,
    pub name: String,
    pub index: u32,
}

#[event]
pub struct PitchStarted {
    pub project: Pubkey,
}

#[event]
pub struct PitchEnded {
    pub project: Option<Pubkey>,
}

#[event]
pub struct FinalLeaderboardToggled {
    pub visible: bool,
}

#[event]
pub struct BidPlaced {
    pub project: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    /// Amount of the replaced bid when this was an update.
    pub previous_amount: Option<u64>,
    pub wallet_after: u64,
}

#[event]
pub struct BidRemoved {
    pub project: Pubkey,
    pub bidder: Pubkey,
    pub refund: u64,
    pub wallet_after: u64,
}

#[event]
pub struct WalletsDistributed {
    pub credited: u32,
    pub team_allocation: u64,
    pub attendee_allocation: u64,
    pub total_budget: u64,
    pub team_share_bps: u64,
}

#[event]
pub struct WalletReset {
    pub user: Pubkey,
    pub bids_removed: u32,
    pub wallet: u64,
}

#[event]
pub struct UserDeleted {
    pub user: Pubkey,
    pub authority: Pubkey,
    pub bids_removed: u32,
}

#[event]
pub struct TeamRoleChanged {
    pub user: Pubkey,
    pub is_team_member: bool,
}

#![allow(unexpected_cfgs)]
// See https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana)

pub mod constants;
pub mod error;
pub mod events;
pub mod handlers;
pub mod state;

use anchor_lang::prelude::*;
use handlers::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod pitchbid {
    use super::*;

    /// Create the shared event state: registration closed, no active pitch.
    pub fn initialize(context: Context<InitializeAccountConstraints>) -> Result<()> {
        handlers::initialize::initialize(context)
    }

    /// Open registration with a fresh auto-close window.
    pub fn open_registration(context: Context<OpenRegistrationAccountConstraints>) -> Result<()> {
        handlers::registration::open_registration(context)
    }

    /// Close registration; permissionless once the window has expired.
    pub fn close_registration(
        context: Context<CloseRegistrationAccountConstraints>,
    ) -> Result<()> {
        handlers::registration::close_registration(context)
    }

    /// Register a participant with an empty wallet.
    pub fn register_user(
        context: Context<RegisterUserAccountConstraints>,
        name: String,
        is_team_member: bool,
    ) -> Result<()> {
        handlers::user::register_user(context, name, is_team_member)
    }

    /// Add a pitch-able project with an empty bid ledger.
    pub fn create_project(
        context: Context<CreateProjectAccountConstraints>,
        name: String,
        description: String,
    ) -> Result<()> {
        handlers::project::create_project(context, name, description)
    }

    /// Put the given project on stage.
    pub fn start_pitch(context: Context<StartPitchAccountConstraints>) -> Result<()> {
        handlers::pitch::start_pitch(context)
    }

    /// Take the current project off stage.
    pub fn end_pitch(context: Context<EndPitchAccountConstraints>) -> Result<()> {
        handlers::pitch::end_pitch(context)
    }

    /// Toggle the projector's final-leaderboard view.
    pub fn set_final_leaderboard(
        context: Context<SetFinalLeaderboardAccountConstraints>,
        visible: bool,
    ) -> Result<()> {
        handlers::pitch::set_final_leaderboard(context, visible)
    }

    /// Place a bid on the active pitch, or revise an existing one.
    pub fn place_bid(context: Context<PlaceBidAccountConstraints>, amount: u64) -> Result<()> {
        handlers::bid::place_bid(context, amount)
    }

    /// Withdraw a bid, refunding its full amount to the wallet.
    pub fn remove_bid(context: Context<RemoveBidAccountConstraints>) -> Result<()> {
        handlers::bid::remove_bid(context)
    }

    /// Credit per-capita wallets to the not-yet-funded users passed as
    /// remaining accounts.
    pub fn distribute_wallets<'info>(
        context: Context<'_, '_, '_, 'info, DistributeWalletsAccountConstraints<'info>>,
        total_budget: u64,
        team_share_bps: u64,
    ) -> Result<()> {
        handlers::roster::distribute_wallets(context, total_budget, team_share_bps)
    }

    /// Clear a user's bids and restore their per-capita wallet amount.
    pub fn reset_user_wallet<'info>(
        context: Context<'_, '_, '_, 'info, ResetUserWalletAccountConstraints<'info>>,
    ) -> Result<()> {
        handlers::roster::reset_user_wallet(context)
    }

    /// Delete a user and cascade-remove their bids from every project.
    pub fn delete_user<'info>(
        context: Context<'_, '_, '_, 'info, DeleteUserAccountConstraints<'info>>,
    ) -> Result<()> {
        handlers::roster::delete_user(context)
    }

    /// Flip a user's team-member role.
    pub fn toggle_team_member(
        context: Context<ToggleTeamMemberAccountConstraints>,
    ) -> Result<()> {
        handlers::roster::toggle_team_member(context)
    }
}

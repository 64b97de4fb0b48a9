//! Event state creation

use anchor_lang::prelude::*;

use crate::constants::SEED_EVENT_STATE;
use crate::error::ErrorCode;
use crate::state::EventState;

#[derive(Accounts)]
pub struct InitializeAccountConstraints<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        init_if_needed,
        payer = admin,
        space = EventState::DISCRIMINATOR.len() + EventState::INIT_SPACE,
        seeds = [SEED_EVENT_STATE],
        bump
    )]
    pub event_state: Account<'info, EventState>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(context: Context<InitializeAccountConstraints>) -> Result<()> {
    let event_state = &mut context.accounts.event_state;
    require!(!event_state.initialized, ErrorCode::AlreadyInitialized);

    event_state.admin = context.accounts.admin.key();
    event_state.initialized = true;
    event_state.registration_open = false;
    event_state.registration_expires_at = None;
    event_state.current_pitch = None;
    event_state.show_final_leaderboard = false;
    event_state.total_budget = 0;
    event_state.team_share_bps = 0;
    event_state.team_count = 0;
    event_state.attendee_count = 0;
    event_state.projects_created = 0;
    event_state.bump = context.bumps.event_state;

    Ok(())
}

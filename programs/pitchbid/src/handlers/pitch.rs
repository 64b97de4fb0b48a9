//! Pitch control and presentation instruction handlers

use anchor_lang::prelude::*;

use crate::constants::SEED_EVENT_STATE;
use crate::error::ErrorCode;
use crate::events::{FinalLeaderboardToggled, PitchEnded, PitchStarted};
use crate::state::{EventState, Project};

#[derive(Accounts)]
pub struct StartPitchAccountConstraints<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
    pub project: Box<Account<'info, Project>>,
}

/// Make the given project the active pitch. Starting a new pitch while
/// another is active simply replaces it; only one project is ever active.
pub fn start_pitch(context: Context<StartPitchAccountConstraints>) -> Result<()> {
    let event_state = &mut context.accounts.event_state;
    let project = context.accounts.project.key();

    event_state.current_pitch = Some(project);

    emit!(PitchStarted { project });

    Ok(())
}

#[derive(Accounts)]
pub struct EndPitchAccountConstraints<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
}

pub fn end_pitch(context: Context<EndPitchAccountConstraints>) -> Result<()> {
    let event_state = &mut context.accounts.event_state;
    let project = event_state.current_pitch.take();

    emit!(PitchEnded { project });

    Ok(())
}

#[derive(Accounts)]
pub struct SetFinalLeaderboardAccountConstraints<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
}

pub fn set_final_leaderboard(
    context: Context<SetFinalLeaderboardAccountConstraints>,
    visible: bool,
) -> Result<()> {
    let event_state = &mut context.accounts.event_state;
    event_state.show_final_leaderboard = visible;

    emit!(FinalLeaderboardToggled { visible });

    Ok(())
}

//! Registration window instruction handlers

use anchor_lang::prelude::*;

use crate::constants::{REGISTRATION_WINDOW_SECS, SEED_EVENT_STATE};
use crate::error::ErrorCode;
use crate::events::{RegistrationClosed, RegistrationOpened};
use crate::state::EventState;

#[derive(Accounts)]
pub struct OpenRegistrationAccountConstraints<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
}

pub fn open_registration(context: Context<OpenRegistrationAccountConstraints>) -> Result<()> {
    let clock = Clock::get()?;
    let event_state = &mut context.accounts.event_state;

    // Reopening restarts the window
    let expires_at = clock.unix_timestamp + REGISTRATION_WINDOW_SECS;
    event_state.registration_open = true;
    event_state.registration_expires_at = Some(expires_at);

    emit!(RegistrationOpened { expires_at });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseRegistrationAccountConstraints<'info> {
    pub authority: Signer<'info>,
    #[account(mut, seeds = [SEED_EVENT_STATE], bump = event_state.bump)]
    pub event_state: Account<'info, EventState>,
}

/// Close registration. The admin may close at any time; anyone else may
/// complete the transition once the window has expired, so a lost admin
/// session cannot leave registration stuck open.
pub fn close_registration(context: Context<CloseRegistrationAccountConstraints>) -> Result<()> {
    let clock = Clock::get()?;
    let event_state = &mut context.accounts.event_state;

    let expired = event_state.registration_expired(clock.unix_timestamp);
    if context.accounts.authority.key() != event_state.admin {
        require!(expired, ErrorCode::Unauthorized);
    }

    event_state.registration_open = false;
    event_state.registration_expires_at = None;

    emit!(RegistrationClosed { expired });

    Ok(())
}

//! Participant registration instruction handlers

use anchor_lang::prelude::*;

use crate::constants::{SEED_EVENT_STATE, SEED_USER};
use crate::error::ErrorCode;
use crate::events::UserRegistered;
use crate::state::{EventState, User};

#[derive(Accounts)]
pub struct RegisterUserAccountConstraints<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(mut, seeds = [SEED_EVENT_STATE], bump = event_state.bump)]
    pub event_state: Account<'info, EventState>,
    #[account(
        init,
        payer = authority,
        space = User::DISCRIMINATOR.len() + User::INIT_SPACE,
        seeds = [SEED_USER, authority.key().as_ref()],
        bump
    )]
    pub user: Account<'info, User>,
    pub system_program: Program<'info, System>,
}

pub fn register_user(
    context: Context<RegisterUserAccountConstraints>,
    name: String,
    is_team_member: bool,
) -> Result<()> {
    let clock = Clock::get()?;
    let event_state = &mut context.accounts.event_state;

    require!(event_state.registration_open, ErrorCode::RegistrationClosed);
    // Double-check the window in case nobody has closed it yet
    require!(
        !event_state.registration_expired(clock.unix_timestamp),
        ErrorCode::RegistrationExpired
    );

    let name = name.trim().to_string();
    require!(!name.is_empty(), ErrorCode::NameEmpty);
    require!(name.len() <= User::MAX_NAME_LEN, ErrorCode::NameTooLong);

    let user = &mut context.accounts.user;
    user.authority = context.accounts.authority.key();
    user.name = name.clone();
    user.wallet = 0;
    user.is_team_member = is_team_member;
    user.has_received_wallet = false;
    user.registered_at = clock.unix_timestamp;
    user.bump = context.bumps.user;

    if is_team_member {
        event_state.team_count = event_state
            .team_count
            .checked_add(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
    } else {
        event_state.attendee_count = event_state
            .attendee_count
            .checked_add(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
    }

    emit!(UserRegistered {
        user: user.key(),
        authority: user.authority,
        name,
        is_team_member,
    });

    Ok(())
}

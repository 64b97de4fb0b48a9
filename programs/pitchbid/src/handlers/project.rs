//! Project creation instruction handlers

use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_PROJECT_DESCRIPTION, SEED_EVENT_STATE, SEED_PROJECT};
use crate::error::ErrorCode;
use crate::events::ProjectCreated;
use crate::state::{EventState, Project};

#[derive(Accounts)]
pub struct CreateProjectAccountConstraints<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
    #[account(
        init,
        payer = admin,
        space = Project::DISCRIMINATOR.len() + Project::INIT_SPACE,
        seeds = [SEED_PROJECT, event_state.projects_created.to_le_bytes().as_ref()],
        bump
    )]
    pub project: Box<Account<'info, Project>>,
    pub system_program: Program<'info, System>,
}

pub fn create_project(
    context: Context<CreateProjectAccountConstraints>,
    name: String,
    description: String,
) -> Result<()> {
    let clock = Clock::get()?;
    let event_state = &mut context.accounts.event_state;
    let project = &mut context.accounts.project;

    let name = name.trim().to_string();
    require!(!name.is_empty(), ErrorCode::NameEmpty);
    require!(name.len() <= Project::MAX_NAME_LEN, ErrorCode::NameTooLong);

    let description = description.trim().to_string();
    require!(
        description.len() <= Project::MAX_DESCRIPTION_LEN,
        ErrorCode::DescriptionTooLong
    );

    project.name = name.clone();
    project.description = if description.is_empty() {
        DEFAULT_PROJECT_DESCRIPTION.to_string()
    } else {
        description
    };
    project.bids = Vec::new();
    project.created_at = clock.unix_timestamp;
    project.index = event_state.projects_created;
    project.bump = context.bumps.project;

    event_state.projects_created = event_state
        .projects_created
        .checked_add(1)
        .ok_or(error!(ErrorCode::MathOverflow))?;

    emit!(ProjectCreated {
        project: project.key(),
        name,
        index: project.index,
    });

    Ok(())
}

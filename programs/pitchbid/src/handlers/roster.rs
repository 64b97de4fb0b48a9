//! Roster administration instruction handlers: wallet distribution, wallet
//! reset, user deletion, and role changes.
//!
//! The batch operations take the affected User or Project accounts as
//! `remaining_accounts` and rewrite them within the one instruction, so a
//! cascade is never half-applied.

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, SEED_EVENT_STATE, SEED_USER};
use crate::error::ErrorCode;
use crate::events::{TeamRoleChanged, UserDeleted, WalletReset, WalletsDistributed};
use crate::state::{EventState, Project, User};

#[derive(Accounts)]
pub struct DistributeWalletsAccountConstraints<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
}

/// Credit every not-yet-funded user in `remaining_accounts` with their
/// group's per-capita share of the budget. Users already holding a wallet
/// are skipped, so re-invoking after late registrations only credits the
/// newcomers, at the parameters of this call. Earlier recipients are never
/// retroactively equalized.
pub fn distribute_wallets<'info>(
    context: Context<'_, '_, '_, 'info, DistributeWalletsAccountConstraints<'info>>,
    total_budget: u64,
    team_share_bps: u64,
) -> Result<()> {
    let event_state = &mut context.accounts.event_state;

    require!(
        !event_state.registration_open,
        ErrorCode::RegistrationStillOpen
    );
    require!(total_budget > 0, ErrorCode::InvalidBudget);
    require!(team_share_bps <= BPS_DENOMINATOR, ErrorCode::InvalidTeamShare);

    event_state.total_budget = total_budget;
    event_state.team_share_bps = team_share_bps;

    // Group counts are read once here, under the event state write-lock
    let team_allocation = event_state.wallet_allocation(true)?;
    let attendee_allocation = event_state.wallet_allocation(false)?;

    let mut credited = 0u32;
    for account_info in context.remaining_accounts.iter() {
        let mut data = account_info.try_borrow_mut_data()?;
        let mut user = User::try_deserialize(&mut &data[..])?;

        if user.has_received_wallet {
            continue;
        }

        user.wallet = if user.is_team_member {
            team_allocation
        } else {
            attendee_allocation
        };
        user.has_received_wallet = true;
        write_back(&mut data, &user)?;

        credited += 1;
    }

    msg!(
        "Distributed wallets to {} new user(s): team {}, attendee {}",
        credited,
        team_allocation,
        attendee_allocation
    );

    emit!(WalletsDistributed {
        credited,
        team_allocation,
        attendee_allocation,
        total_budget,
        team_share_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ResetUserWalletAccountConstraints<'info> {
    pub admin: Signer<'info>,
    #[account(
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
    #[account(mut, seeds = [SEED_USER, user.authority.as_ref()], bump = user.bump)]
    pub user: Account<'info, User>,
}

/// Clear the user's bids from every project in `remaining_accounts` and
/// restore their wallet to the per-capita amount. The amount is recomputed
/// from the current roster and the stored budget parameters, so it reflects
/// what the user would receive today, which can differ from what they were
/// originally credited if the roster changed in between.
pub fn reset_user_wallet<'info>(
    context: Context<'_, '_, '_, 'info, ResetUserWalletAccountConstraints<'info>>,
) -> Result<()> {
    let event_state = &context.accounts.event_state;
    let user = &mut context.accounts.user;

    require!(event_state.total_budget > 0, ErrorCode::BudgetNotConfigured);

    // The removed amounts are not credited back: the wallet is being reset
    // wholesale to the per-capita figure
    let (refunded, bids_removed) = strip_bids(context.remaining_accounts, &user.authority)?;

    user.wallet = event_state.wallet_allocation(user.is_team_member)?;

    msg!(
        "Reset wallet for {}: {} bid(s) totalling {} cleared",
        user.name,
        bids_removed,
        refunded
    );

    emit!(WalletReset {
        user: user.key(),
        bids_removed,
        wallet: user.wallet,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DeleteUserAccountConstraints<'info> {
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
        mut,
        seeds = [SEED_USER, user.authority.as_ref()],
        bump = user.bump,
        close = admin
    )]
    pub user: Account<'info, User>,
}

/// Remove the user and every bid they hold across the projects passed in
/// `remaining_accounts`. No refund bookkeeping: the wallet ceases to exist
/// with the account.
pub fn delete_user<'info>(
    context: Context<'_, '_, '_, 'info, DeleteUserAccountConstraints<'info>>,
) -> Result<()> {
    let event_state = &mut context.accounts.event_state;
    let user = &context.accounts.user;

    let (_, bids_removed) = strip_bids(context.remaining_accounts, &user.authority)?;

    if user.is_team_member {
        event_state.team_count = event_state
            .team_count
            .checked_sub(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
    } else {
        event_state.attendee_count = event_state
            .attendee_count
            .checked_sub(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
    }

    msg!("Deleted user {} ({} bid(s) removed)", user.name, bids_removed);

    emit!(UserDeleted {
        user: user.key(),
        authority: user.authority,
        bids_removed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ToggleTeamMemberAccountConstraints<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_EVENT_STATE],
        bump = event_state.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub event_state: Account<'info, EventState>,
    #[account(mut, seeds = [SEED_USER, user.authority.as_ref()], bump = user.bump)]
    pub user: Account<'info, User>,
}

/// Flip the user's role and move them between the roster counters. Existing
/// bid entries keep the role they were placed with, and the wallet is left
/// untouched.
pub fn toggle_team_member(context: Context<ToggleTeamMemberAccountConstraints>) -> Result<()> {
    let event_state = &mut context.accounts.event_state;
    let user = &mut context.accounts.user;

    user.is_team_member = !user.is_team_member;
    if user.is_team_member {
        event_state.team_count = event_state
            .team_count
            .checked_add(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
        event_state.attendee_count = event_state
            .attendee_count
            .checked_sub(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
    } else {
        event_state.attendee_count = event_state
            .attendee_count
            .checked_add(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
        event_state.team_count = event_state
            .team_count
            .checked_sub(1)
            .ok_or(error!(ErrorCode::MathOverflow))?;
    }

    emit!(TeamRoleChanged {
        user: user.key(),
        is_team_member: user.is_team_member,
    });

    Ok(())
}

/// Remove every bid by `bidder` from the Project accounts given. Returns the
/// total amount removed and the number of entries removed.
fn strip_bids<'info>(
    project_accounts: &[AccountInfo<'info>],
    bidder: &Pubkey,
) -> Result<(u64, u32)> {
    let mut total_amount = 0u64;
    let mut removed = 0u32;

    for account_info in project_accounts.iter() {
        let mut data = account_info.try_borrow_mut_data()?;
        let mut project = Project::try_deserialize(&mut &data[..])?;

        if let Some(amount) = project.remove_bid(bidder) {
            total_amount = total_amount
                .checked_add(amount)
                .ok_or(error!(ErrorCode::MathOverflow))?;
            removed += 1;
            write_back(&mut data, &project)?;
        }
    }

    Ok((total_amount, removed))
}

fn write_back<T: AccountSerialize>(data: &mut [u8], value: &T) -> Result<()> {
    let mut serialized: Vec<u8> = Vec::new();
    value.try_serialize(&mut serialized)?;

    if serialized.len() <= data.len() {
        data[..serialized.len()].copy_from_slice(&serialized);
        Ok(())
    } else {
        Err(ProgramError::AccountDataTooSmall.into())
    }
}

//! Bid instruction handlers: the wallet/bid-ledger transaction engine.
//!
//! Each instruction takes the bidder's User account and the Project account
//! as writable, so the runtime serializes concurrent bidders and the
//! read-compute-write below is atomic: the wallet is debited in the same
//! transaction that records the bid, never separately.

use anchor_lang::prelude::*;

use crate::constants::{SEED_EVENT_STATE, SEED_USER};
use crate::error::ErrorCode;
use crate::events::{BidPlaced, BidRemoved};
use crate::state::{BidEntry, EventState, Project, User};

#[derive(Accounts)]
pub struct PlaceBidAccountConstraints<'info> {
    pub bidder: Signer<'info>,
    #[account(seeds = [SEED_EVENT_STATE], bump = event_state.bump)]
    pub event_state: Account<'info, EventState>,
    #[account(mut, seeds = [SEED_USER, bidder.key().as_ref()], bump = user.bump)]
    pub user: Account<'info, User>,
    #[account(mut)]
    pub project: Box<Account<'info, Project>>,
}

/// Place a new bid or revise an existing one. A second bid on the same
/// project replaces the first, and the wallet moves by the net change only,
/// so a bidder can freely revise upward or downward without withdrawing.
pub fn place_bid(context: Context<PlaceBidAccountConstraints>, amount: u64) -> Result<()> {
    let event_state = &context.accounts.event_state;
    let user = &mut context.accounts.user;
    let project = &mut context.accounts.project;

    require!(amount > 0, ErrorCode::InvalidBidAmount);

    // Bids are only accepted against the project currently on stage
    match event_state.current_pitch {
        None => return Err(error!(ErrorCode::NoActivePitch)),
        Some(active) => require!(
            active == project.key(),
            ErrorCode::ProjectNotBeingPitched
        ),
    }

    // Checked against the freshly read wallet, before any refund is applied
    require!(amount <= user.wallet, ErrorCode::InsufficientFunds);

    let clock = Clock::get()?;
    let previous_amount = project.upsert_bid(BidEntry {
        bidder: user.authority,
        bidder_name: user.name.clone(),
        amount,
        placed_at: clock.unix_timestamp,
        is_team_member: user.is_team_member,
    })?;

    if let Some(refund) = previous_amount {
        user.credit(refund)?;
    }
    user.debit(amount)?;

    emit!(BidPlaced {
        project: project.key(),
        bidder: user.authority,
        amount,
        previous_amount,
        wallet_after: user.wallet,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveBidAccountConstraints<'info> {
    pub bidder: Signer<'info>,
    #[account(mut, seeds = [SEED_USER, bidder.key().as_ref()], bump = user.bump)]
    pub user: Account<'info, User>,
    #[account(mut)]
    pub project: Box<Account<'info, Project>>,
}

/// Withdraw the bidder's bid on this project, refunding its full amount.
/// Removing a bid that does not exist is a no-op, not an error. Unlike
/// placing, removal is not gated on the active pitch, so a bidder can pull
/// funds back out of an earlier pitch.
pub fn remove_bid(context: Context<RemoveBidAccountConstraints>) -> Result<()> {
    let user = &mut context.accounts.user;
    let project = &mut context.accounts.project;

    if let Some(refund) = project.remove_bid(&user.authority) {
        user.credit(refund)?;

        emit!(BidRemoved {
            project: project.key(),
            bidder: user.authority,
            refund,
            wallet_after: user.wallet,
        });
    }

    Ok(())
}

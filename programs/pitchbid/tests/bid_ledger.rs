use anchor_lang::prelude::*;

use pitchbid::state::{BidEntry, EventState, Project, User};

// Helper: Generate a test pubkey
fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

// Helper: Fixed timestamp for deterministic tests
fn test_time() -> i64 {
    1_700_000_000
}

fn test_user(seed: u8, wallet: u64) -> User {
    User {
        authority: test_pubkey(seed),
        name: format!("Participant {}", seed),
        wallet,
        is_team_member: false,
        has_received_wallet: wallet > 0,
        registered_at: test_time(),
        bump: 255,
    }
}

fn test_project(index: u32) -> Project {
    Project {
        name: format!("Project {}", index),
        description: "No description provided".to_string(),
        bids: Vec::new(),
        created_at: test_time(),
        index,
        bump: 254,
    }
}

fn test_event_state(
    total_budget: u64,
    team_share_bps: u64,
    team_count: u32,
    attendee_count: u32,
) -> EventState {
    EventState {
        admin: test_pubkey(1),
        initialized: true,
        registration_open: false,
        registration_expires_at: None,
        current_pitch: None,
        show_final_leaderboard: false,
        total_budget,
        team_share_bps,
        team_count,
        attendee_count,
        projects_created: 0,
        bump: 253,
    }
}

fn entry(user: &User, amount: u64) -> BidEntry {
    BidEntry {
        bidder: user.authority,
        bidder_name: user.name.clone(),
        amount,
        placed_at: test_time(),
        is_team_member: user.is_team_member,
    }
}

// Mirrors the ledger math of the place_bid handler: validate against the
// freshly read wallet, upsert the entry, then apply the net wallet change.
fn place_bid(user: &mut User, project: &mut Project, amount: u64) {
    assert!(amount > 0);
    assert!(amount <= user.wallet, "insufficient funds");
    let previous = project.upsert_bid(entry(user, amount)).unwrap();
    if let Some(refund) = previous {
        user.credit(refund).unwrap();
    }
    user.debit(amount).unwrap();
}

fn remove_bid(user: &mut User, project: &mut Project) {
    if let Some(refund) = project.remove_bid(&user.authority) {
        user.credit(refund).unwrap();
    }
}

// Mirrors the distribute_wallets handler loop over remaining accounts.
fn distribute(event_state: &EventState, users: &mut [User]) -> u32 {
    let team_allocation = event_state.wallet_allocation(true).unwrap();
    let attendee_allocation = event_state.wallet_allocation(false).unwrap();
    let mut credited = 0;
    for user in users.iter_mut() {
        if user.has_received_wallet {
            continue;
        }
        user.wallet = if user.is_team_member {
            team_allocation
        } else {
            attendee_allocation
        };
        user.has_received_wallet = true;
        credited += 1;
    }
    credited
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_bid_debits_wallet() {
        let mut user = test_user(2, 5_000);
        let mut project = test_project(0);

        place_bid(&mut user, &mut project, 2_000);

        assert_eq!(user.wallet, 3_000);
        assert_eq!(project.bids.len(), 1);
        assert_eq!(project.find_bid(&user.authority).unwrap().amount, 2_000);
    }

    #[test]
    fn test_update_replaces_bid_not_appends() {
        let mut user = test_user(3, 9_000);
        let mut project = test_project(0);

        place_bid(&mut user, &mut project, 1_000);
        assert_eq!(user.wallet, 8_000);

        place_bid(&mut user, &mut project, 1_500);

        // Exactly one entry, holding the revised amount; wallet reflects the
        // net change only
        assert_eq!(user.wallet, 8_500);
        assert_eq!(project.bids.len(), 1);
        assert_eq!(project.find_bid(&user.authority).unwrap().amount, 1_500);
    }

    #[test]
    fn test_remove_bid_refunds_full_amount() {
        let mut user = test_user(4, 5_000);
        let mut project = test_project(0);

        place_bid(&mut user, &mut project, 2_000);
        assert_eq!(user.wallet, 3_000);

        remove_bid(&mut user, &mut project);

        assert_eq!(user.wallet, 5_000);
        assert!(project.bids.is_empty());

        // Removing again is a no-op, not an error
        remove_bid(&mut user, &mut project);
        assert_eq!(user.wallet, 5_000);
    }

    #[test]
    fn test_conservation_across_revisions() {
        let initial = 10_000u64;
        let mut user = test_user(5, initial);
        let mut project = test_project(0);

        for amount in [3_000, 500, 7_500, 1] {
            place_bid(&mut user, &mut project, amount);
            let held = project.find_bid(&user.authority).unwrap().amount;
            assert_eq!(initial - user.wallet, held);
        }

        remove_bid(&mut user, &mut project);
        assert_eq!(user.wallet, initial);
    }

    #[test]
    fn test_rapid_updates_serialize_to_single_debit() {
        // Two competing updates for the same user and project serialize on
        // the account locks; whichever lands last wins and the wallet holds
        // exactly one debit.
        let mut user = test_user(6, 10_000);
        let mut project = test_project(0);

        place_bid(&mut user, &mut project, 4_000);
        place_bid(&mut user, &mut project, 2_500);

        assert_eq!(project.bids.len(), 1);
        assert_eq!(project.find_bid(&user.authority).unwrap().amount, 2_500);
        assert_eq!(user.wallet, 7_500);
    }

    #[test]
    fn test_insufficient_funds_rejected() {
        let mut user = test_user(7, 5_000);
        let mut project = test_project(0);

        place_bid(&mut user, &mut project, 2_000);
        assert_eq!(user.wallet, 3_000);

        // An update is validated against the already-debited wallet, so an
        // amount above it is rejected even though the net change would fit
        assert!(user.debit(4_000).is_err());
        assert_eq!(user.wallet, 3_000);
        assert_eq!(project.find_bid(&user.authority).unwrap().amount, 2_000);
    }

    #[test]
    fn test_at_most_one_bid_per_user() {
        let mut alice = test_user(8, 5_000);
        let mut bob = test_user(9, 5_000);
        let mut project = test_project(0);

        place_bid(&mut alice, &mut project, 1_000);
        place_bid(&mut bob, &mut project, 2_000);
        place_bid(&mut alice, &mut project, 3_000);
        place_bid(&mut bob, &mut project, 500);

        assert_eq!(project.bids.len(), 2);
        for bid in &project.bids {
            let holders = project
                .bids
                .iter()
                .filter(|other| other.bidder == bid.bidder)
                .count();
            assert_eq!(holders, 1);
        }
    }

    #[test]
    fn test_bid_ledger_capacity() {
        let mut project = test_project(0);
        for seed in 0..Project::MAX_BIDS as u8 {
            let user = test_user(seed, 1_000);
            project.upsert_bid(entry(&user, 100)).unwrap();
        }

        // A new bidder is rejected once the ledger is full
        let late = test_user(200, 1_000);
        assert!(project.upsert_bid(entry(&late, 100)).is_err());

        // An existing bidder can still revise in place
        let existing = test_user(0, 1_000);
        let previous = project.upsert_bid(entry(&existing, 250)).unwrap();
        assert_eq!(previous, Some(100));
        assert_eq!(project.bids.len(), Project::MAX_BIDS);
    }

    #[test]
    fn test_floor_rounding_distribution() {
        // 100_000 at 60% over 3 team members and 2 attendees: everyone gets
        // 20_000 and the full budget is paid out
        let event_state = test_event_state(100_000, 6_000, 3, 2);
        assert_eq!(event_state.wallet_allocation(true).unwrap(), 20_000);
        assert_eq!(event_state.wallet_allocation(false).unwrap(), 20_000);

        // Uneven split rounds down and leaves the remainder undistributed
        let event_state = test_event_state(100_000, 6_000, 7, 3);
        assert_eq!(event_state.wallet_allocation(true).unwrap(), 8_571);
        assert_eq!(event_state.wallet_allocation(false).unwrap(), 13_333);
    }

    #[test]
    fn test_zero_group_allocates_nothing() {
        let event_state = test_event_state(100_000, 10_000, 4, 0);
        assert_eq!(event_state.wallet_allocation(true).unwrap(), 25_000);
        assert_eq!(event_state.wallet_allocation(false).unwrap(), 0);
        assert_eq!(EventState::per_capita(50_000, 0), 0);
    }

    #[test]
    fn test_distribution_is_idempotent() {
        let event_state = test_event_state(100_000, 6_000, 1, 2);
        let mut users = vec![test_user(10, 0), test_user(11, 0), test_user(12, 0)];
        users[0].is_team_member = true;

        assert_eq!(distribute(&event_state, &mut users), 3);
        assert_eq!(users[0].wallet, 60_000);
        assert_eq!(users[1].wallet, 20_000);

        // A second call with no new registrations credits nobody
        let wallets: Vec<u64> = users.iter().map(|u| u.wallet).collect();
        assert_eq!(distribute(&event_state, &mut users), 0);
        assert!(users.iter().all(|u| u.has_received_wallet));
        assert_eq!(wallets, users.iter().map(|u| u.wallet).collect::<Vec<_>>());
    }

    #[test]
    fn test_late_registrant_credited_at_current_parameters() {
        let event_state = test_event_state(100_000, 6_000, 1, 2);
        let mut users = vec![test_user(13, 0), test_user(14, 0), test_user(15, 0)];
        users[0].is_team_member = true;
        distribute(&event_state, &mut users);

        // A user registers late and the admin re-runs distribution with a
        // different budget: only the newcomer is credited, at the new
        // parameters; earlier recipients are not equalized
        users.push(test_user(16, 0));
        let event_state = test_event_state(50_000, 6_000, 1, 3);
        assert_eq!(distribute(&event_state, &mut users), 1);
        assert_eq!(users[3].wallet, 6_666);
        assert_eq!(users[1].wallet, 20_000);
    }

    #[test]
    fn test_reset_allocation_follows_current_roster() {
        // Reset restores what the user would receive today, not what they
        // originally got: the denominator is the current group count
        let before = test_event_state(100_000, 6_000, 2, 2);
        let after = test_event_state(100_000, 6_000, 4, 2);
        assert_eq!(before.wallet_allocation(true).unwrap(), 30_000);
        assert_eq!(after.wallet_allocation(true).unwrap(), 15_000);
    }

    #[test]
    fn test_cascade_delete_leaves_no_dangling_bids() {
        let mut target = test_user(20, 10_000);
        let mut other = test_user(21, 10_000);
        let mut projects = vec![test_project(0), test_project(1), test_project(2)];

        for (index, project) in projects.iter_mut().enumerate() {
            place_bid(&mut target, project, 1_000 * (index as u64 + 1));
            place_bid(&mut other, project, 500);
        }

        // Mirrors the strip loop run by delete_user over remaining accounts
        let mut removed = 0;
        for project in projects.iter_mut() {
            if project.remove_bid(&target.authority).is_some() {
                removed += 1;
            }
        }

        assert_eq!(removed, 3);
        for project in &projects {
            assert!(project.find_bid(&target.authority).is_none());
            assert_eq!(project.find_bid(&other.authority).unwrap().amount, 500);
        }
    }

    #[test]
    fn test_registration_expiry_window() {
        let mut event_state = test_event_state(0, 0, 0, 0);
        assert!(!event_state.registration_expired(test_time()));

        event_state.registration_open = true;
        event_state.registration_expires_at = Some(test_time() + 600);

        assert!(!event_state.registration_expired(test_time()));
        assert!(!event_state.registration_expired(test_time() + 599));
        assert!(event_state.registration_expired(test_time() + 600));
        assert!(event_state.registration_expired(test_time() + 601));
    }

    #[test]
    fn test_role_toggle_keeps_denormalized_bid_role() {
        let mut user = test_user(22, 5_000);
        let mut project = test_project(0);

        place_bid(&mut user, &mut project, 1_000);
        assert!(!project.find_bid(&user.authority).unwrap().is_team_member);

        // Flipping the role later does not rewrite the recorded entry
        user.is_team_member = true;
        assert!(!project.find_bid(&user.authority).unwrap().is_team_member);

        // A subsequent revision captures the new role
        place_bid(&mut user, &mut project, 1_200);
        assert!(project.find_bid(&user.authority).unwrap().is_team_member);
    }
}

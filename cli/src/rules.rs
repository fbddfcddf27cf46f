//! Caller-side preconditions applied before any transaction is built.
//! The program enforces all of these again on chain; checking here keeps
//! a doomed transaction from ever being submitted.

use anchor_client::solana_sdk::pubkey::Pubkey;
use anyhow::{bail, ensure, Result};
use election_interface::Election;

/// Form-level validation for a new election, before any wallet traffic.
pub fn validate_new_election(title: &str, candidate_names: &[String]) -> Result<()> {
    ensure!(!title.trim().is_empty(), "election title must not be empty");
    ensure!(
        candidate_names.iter().all(|name| !name.trim().is_empty()),
        "candidate names must not be empty"
    );
    ensure!(
        candidate_names.len() >= 2,
        "an election needs at least 2 candidates"
    );
    Ok(())
}

pub fn ensure_votable(election: &Election) -> Result<()> {
    if !election.active {
        bail!("election {} has ended; votes are closed", election.id);
    }
    Ok(())
}

pub fn ensure_endable(election: &Election) -> Result<()> {
    if !election.active {
        bail!("election {} has already ended", election.id);
    }
    Ok(())
}

/// Owner check gating the end-election action. An unknown owner (the
/// lookup failed) counts as not owning the election.
pub fn is_owner(connected: &Pubkey, owner: Option<&Pubkey>) -> bool {
    owner.is_some_and(|owner| owner == connected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn election(active: bool) -> Election {
        Election {
            id: 1,
            bump: 255,
            authority: Pubkey::new_unique(),
            title: "Board seat".to_string(),
            active,
            candidate_count: 2,
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn new_election_requires_a_title() {
        assert!(validate_new_election("  ", &names(&["a", "b"])).is_err());
        assert!(validate_new_election("Board seat", &names(&["a", "b"])).is_ok());
    }

    #[test]
    fn new_election_rejects_blank_candidates() {
        assert!(validate_new_election("Board seat", &names(&["a", " "])).is_err());
    }

    #[test]
    fn new_election_needs_two_candidates() {
        assert!(validate_new_election("Board seat", &names(&["solo"])).is_err());
        assert!(validate_new_election("Board seat", &[]).is_err());
    }

    #[test]
    fn voting_is_blocked_once_inactive() {
        assert!(ensure_votable(&election(true)).is_ok());
        assert!(ensure_votable(&election(false)).is_err());
    }

    #[test]
    fn ending_twice_is_blocked() {
        assert!(ensure_endable(&election(true)).is_ok());
        assert!(ensure_endable(&election(false)).is_err());
    }

    #[test]
    fn owner_check_fails_closed_when_lookup_failed() {
        let me = Pubkey::new_unique();
        assert!(!is_owner(&me, None));
    }

    #[test]
    fn owner_check_compares_canonical_keys() {
        let me = Pubkey::new_unique();
        let someone_else = Pubkey::new_unique();
        assert!(is_owner(&me, Some(&me)));
        assert!(!is_owner(&me, Some(&someone_else)));
    }
}

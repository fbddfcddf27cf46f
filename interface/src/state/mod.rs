pub mod candidate;
pub mod election;
pub mod registry;
pub mod vote_record;

pub use candidate::*;
pub use election::*;
pub use registry::*;
pub use vote_record::*;

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    #[test]
    fn pdas_are_distinct_per_id() {
        assert_ne!(Election::pda(1).0, Election::pda(2).0);
        assert_ne!(Candidate::pda(1, 1).0, Candidate::pda(1, 2).0);
        assert_ne!(Candidate::pda(1, 1).0, Candidate::pda(2, 1).0);
    }

    #[test]
    fn vote_record_pda_depends_on_voter() {
        let one = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        assert_ne!(VoteRecord::pda(3, &one).0, VoteRecord::pda(3, &other).0);
        assert_eq!(VoteRecord::pda(3, &one).0, VoteRecord::pda(3, &one).0);
    }
}

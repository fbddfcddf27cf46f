use anchor_lang::prelude::*;

pub const MAX_CANDIDATE_NAME_LEN: usize = 64;

#[account]
#[derive(InitSpace, Debug)]
pub struct Candidate {
    /// ID within the election's ballot, 1-based
    pub id: u64,
    /// Bump seed for the PDA
    pub bump: u8,
    /// Election this candidate belongs to
    pub election_id: u64,
    /// Display name
    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub name: String,
    /// Running tally, maintained by the program
    pub vote_count: u64,
}

impl Candidate {
    pub fn pda(election_id: u64, candidate_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                b"Candidate",
                &election_id.to_le_bytes(),
                &candidate_id.to_le_bytes(),
            ],
            &crate::ID,
        )
    }
}

use anchor_lang::prelude::*;

/// One per (election, voter). Its existence is how the program rejects a
/// second vote from the same wallet.
#[account]
#[derive(InitSpace, Debug)]
pub struct VoteRecord {
    /// Bump seed for the PDA
    pub bump: u8,
    /// Election voted in
    pub election_id: u64,
    /// Candidate voted for
    pub candidate_id: u64,
    /// Wallet that cast the vote
    pub voter: Pubkey,
}

impl VoteRecord {
    pub fn pda(election_id: u64, voter: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[b"VoteRecord", &election_id.to_le_bytes(), voter.as_ref()],
            &crate::ID,
        )
    }
}

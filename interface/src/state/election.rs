use anchor_lang::prelude::*;

pub const MAX_TITLE_LEN: usize = 64;

#[account]
#[derive(InitSpace, Debug)]
pub struct Election {
    /// ID, 1-based
    pub id: u64,
    /// Bump seed for the PDA
    pub bump: u8,
    /// Creator of the election; the only account allowed to end it.
    pub authority: Pubkey,
    /// Display title
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    /// Whether votes are still accepted
    pub active: bool,
    /// Number of candidates on the ballot. Candidate ids are 1-based.
    pub candidate_count: u64,
}

impl Election {
    pub fn pda(election_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"Election", &election_id.to_le_bytes()], &crate::ID)
    }
}

use anchor_lang::prelude::*;

/// Singleton tracking how many elections exist. Initialized lazily by the
/// first `init_election`; a missing account means no election was ever
/// created.
#[account]
#[derive(InitSpace, Debug)]
pub struct ElectionRegistry {
    /// Bump seed for the PDA
    pub bump: u8,
    /// Number of elections created so far. Election ids are 1-based, so
    /// this is also the id of the newest election.
    pub election_count: u64,
}

impl ElectionRegistry {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"ElectionRegistry"], &crate::ID)
    }
}

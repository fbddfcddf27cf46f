//! Account-meta shapes for each instruction, mirroring what the program's
//! `#[derive(Accounts)]` contexts expect. Order and mutability must match
//! the deployed program exactly.

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::ToAccountMetas;

pub struct InitElection {
    pub creator: Pubkey,
    pub registry: Pubkey,
    pub election: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for InitElection {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.creator, true),
            AccountMeta::new(self.registry, false),
            AccountMeta::new(self.election, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub struct AddCandidate {
    pub creator: Pubkey,
    pub election: Pubkey,
    pub candidate: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for AddCandidate {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.creator, true),
            AccountMeta::new(self.election, false),
            AccountMeta::new(self.candidate, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub struct CastVote {
    pub voter: Pubkey,
    pub election: Pubkey,
    pub candidate: Pubkey,
    pub vote_record: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for CastVote {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.voter, true),
            AccountMeta::new_readonly(self.election, false),
            AccountMeta::new(self.candidate, false),
            AccountMeta::new(self.vote_record, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub struct EndElection {
    pub authority: Pubkey,
    pub election: Pubkey,
}

impl ToAccountMetas for EndElection {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new(self.election, false),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    #[test]
    fn cast_vote_metas_sign_and_write_where_expected() {
        let metas = CastVote {
            voter: Pubkey::new_unique(),
            election: Pubkey::new_unique(),
            candidate: Pubkey::new_unique(),
            vote_record: Pubkey::new_unique(),
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None);

        assert_eq!(metas.len(), 5);
        assert!(metas[0].is_signer && metas[0].is_writable);
        assert!(!metas[1].is_writable, "election is read-only while voting");
        assert!(metas[2].is_writable, "candidate tally is written");
        assert!(metas[3].is_writable, "vote record is created");
        assert!(!metas[4].is_signer);
    }

    #[test]
    fn end_election_only_signs_the_authority() {
        let authority = Pubkey::new_unique();
        let metas = EndElection {
            authority,
            election: Pubkey::new_unique(),
        }
        .to_account_metas(None);

        assert_eq!(metas.len(), 2);
        assert_eq!(metas[0].pubkey, authority);
        assert!(metas[0].is_signer && !metas[0].is_writable);
        assert!(metas[1].is_writable);
    }
}

use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::system_program;
use anyhow::Result;
use election_interface::{accounts, instruction, Candidate, Election, ElectionRegistry, VoteRecord};
use solana_sdk::instruction::Instruction;

use crate::gateway::ContractHandle;

/// Creates the election and registers every candidate atomically: one
/// `init_election` instruction followed by one `add_candidate` per name,
/// all in a single confirmed transaction.
pub fn send_create_election(
    handle: &ContractHandle,
    election_id: u64,
    title: String,
    candidate_names: Vec<String>,
) -> Result<Signature> {
    let creator = handle.signer();
    let registry = ElectionRegistry::pda().0;
    let election = Election::pda(election_id).0;

    let mut ixs: Vec<Instruction> = handle
        .program()
        .request()
        .accounts(accounts::InitElection {
            creator,
            registry,
            election,
            system_program: system_program::ID,
        })
        .args(instruction::InitElection { election_id, title })
        .instructions()?;

    for (index, name) in candidate_names.into_iter().enumerate() {
        let candidate_id = index as u64 + 1;
        let candidate_ixs = handle
            .program()
            .request()
            .accounts(accounts::AddCandidate {
                creator,
                election,
                candidate: Candidate::pda(election_id, candidate_id).0,
                system_program: system_program::ID,
            })
            .args(instruction::AddCandidate {
                election_id,
                candidate_id,
                name,
            })
            .instructions()?;
        ixs.extend(candidate_ixs);
    }

    handle.send(ixs)
}

pub fn send_cast_vote(
    handle: &ContractHandle,
    election_id: u64,
    candidate_id: u64,
) -> Result<Signature> {
    let voter = handle.signer();
    let ixs = handle
        .program()
        .request()
        .accounts(accounts::CastVote {
            voter,
            election: Election::pda(election_id).0,
            candidate: Candidate::pda(election_id, candidate_id).0,
            vote_record: VoteRecord::pda(election_id, &voter).0,
            system_program: system_program::ID,
        })
        .args(instruction::CastVote {
            election_id,
            candidate_id,
        })
        .instructions()?;

    handle.send(ixs)
}

pub fn send_end_election(handle: &ContractHandle, election_id: u64) -> Result<Signature> {
    let ixs = handle
        .program()
        .request()
        .accounts(accounts::EndElection {
            authority: handle.signer(),
            election: Election::pda(election_id).0,
        })
        .args(instruction::EndElection { election_id })
        .instructions()?;

    handle.send(ixs)
}

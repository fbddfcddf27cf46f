//! Instruction argument encodings, written out by hand since the program
//! source is not vendored. Discriminators follow the Anchor convention:
//! the first 8 bytes of `sha256("global:<instruction_name>")`.

use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};

/// Creates the election account and bumps the registry count. Candidates
/// are registered separately with [`AddCandidate`], usually in the same
/// transaction.
#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitElection {
    pub election_id: u64,
    pub title: String,
}

impl Discriminator for InitElection {
    // sha256("global:init_election")[..8]
    const DISCRIMINATOR: &'static [u8] = &[0xd8, 0xc6, 0x95, 0x4d, 0x47, 0x2e, 0x3e, 0x96];
}
impl InstructionData for InitElection {}

/// Appends one candidate to an election's ballot. Only accepted by the
/// program while the election has no votes and comes from its authority.
#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AddCandidate {
    pub election_id: u64,
    pub candidate_id: u64,
    pub name: String,
}

impl Discriminator for AddCandidate {
    // sha256("global:add_candidate")[..8]
    const DISCRIMINATOR: &'static [u8] = &[0xac, 0x22, 0x1e, 0xf7, 0xa5, 0xd2, 0xe0, 0xa4];
}
impl InstructionData for AddCandidate {}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CastVote {
    pub election_id: u64,
    pub candidate_id: u64,
}

impl Discriminator for CastVote {
    // sha256("global:cast_vote")[..8]
    const DISCRIMINATOR: &'static [u8] = &[0x14, 0xd4, 0x0f, 0xbd, 0x45, 0xb4, 0x45, 0x97];
}
impl InstructionData for CastVote {}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct EndElection {
    pub election_id: u64,
}

impl Discriminator for EndElection {
    // sha256("global:end_election")[..8]
    const DISCRIMINATOR: &'static [u8] = &[0x1a, 0xf8, 0x5c, 0xb8, 0x21, 0xdd, 0x5e, 0xd7];
}
impl InstructionData for EndElection {}

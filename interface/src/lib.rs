//! Client-side bindings for the deployed election program.
//!
//! The program itself lives on chain and is not part of this repository;
//! this crate only describes its surface: account layouts, PDA
//! derivations and instruction encodings. All voting rules (double-vote
//! prevention, tallying, ownership checks) are enforced by the program.

pub mod accounts;
pub mod instruction;
pub mod state;

use anchor_lang::prelude::*;

pub use state::*;

declare_id!("CZ65GXWrxxR9vuyVQZRJBwa83o8SggsNYW9Eru4jTHCQ");

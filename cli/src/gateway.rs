use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair, Signature},
        signer::Signer,
    },
    Client, ClientError, Cluster, Program,
};
use anyhow::{anyhow, Result};
use election_interface::{Candidate, Election, ElectionRegistry};
use log::{error, info};
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::instruction::Instruction;
use solana_sdk::transaction::Transaction;

/// Bridge between command handlers and the wallet keypair on disk.
///
/// Nothing is cached here: every operation re-reads the wallet and
/// re-binds the program handle, so a wallet swapped on disk is seen by
/// the next call (never by calls already in flight).
pub struct WalletGateway {
    wallet_path: PathBuf,
    rpc_url: String,
    micro_lamports: Option<u64>,
    in_flight: Arc<AtomicBool>,
}

impl WalletGateway {
    pub fn new(wallet_path: PathBuf, rpc_url: String, micro_lamports: Option<u64>) -> Self {
        Self {
            wallet_path,
            rpc_url,
            micro_lamports,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Select the wallet account. Returns the address on success, `None`
    /// when no wallet is installed or it cannot be read. Never panics;
    /// the caller decides what a missing account means for its view.
    pub fn connect(&self) -> Option<Pubkey> {
        let wallet = self.read_wallet()?;
        let account = wallet.pubkey();
        info!("Wallet connected: {account}");
        Some(account)
    }

    /// Bind the wallet's current signer to the election program and
    /// return a handle for one logical operation. The signer reflects
    /// the wallet as it is now, not the persisted session account.
    pub fn contract(&self) -> Option<ContractHandle> {
        let wallet = Arc::new(self.read_wallet()?);
        let client = Client::new_with_options(
            Cluster::Custom(self.rpc_url.clone(), self.rpc_url.clone()),
            wallet.clone(),
            CommitmentConfig::confirmed(),
        );
        let program = match client.program(election_interface::id()) {
            Ok(program) => program,
            Err(err) => {
                error!("Failed to bind election program: {err}");
                return None;
            }
        };
        Some(ContractHandle {
            program,
            signer: wallet,
            micro_lamports: self.micro_lamports,
            in_flight: self.in_flight.clone(),
        })
    }

    fn read_wallet(&self) -> Option<Keypair> {
        if !self.wallet_path.is_file() {
            error!(
                "No wallet found at {}; install one (e.g. `solana-keygen new`) and retry",
                self.wallet_path.display()
            );
            return None;
        }
        match read_keypair_file(&self.wallet_path) {
            Ok(keypair) => Some(keypair),
            Err(err) => {
                error!(
                    "Failed to read wallet {}: {err}",
                    self.wallet_path.display()
                );
                None
            }
        }
    }
}

/// Short-lived binding of the wallet's signer to the deployed election
/// program. Acquire one per logical operation via
/// [`WalletGateway::contract`]; it is not meant to be kept around.
pub struct ContractHandle {
    program: Program<Arc<Keypair>>,
    signer: Arc<Keypair>,
    micro_lamports: Option<u64>,
    in_flight: Arc<AtomicBool>,
}

impl ContractHandle {
    pub fn signer(&self) -> Pubkey {
        self.signer.pubkey()
    }

    pub fn program(&self) -> &Program<Arc<Keypair>> {
        &self.program
    }

    // === Reads (no confirmation wait) ===

    /// Number of elections ever created. A missing registry account means
    /// none was created yet.
    pub fn election_count(&self) -> Result<u64, ClientError> {
        match self
            .program
            .account::<ElectionRegistry>(ElectionRegistry::pda().0)
        {
            Ok(registry) => Ok(registry.election_count),
            Err(ClientError::AccountNotFound) => Ok(0),
            Err(err) => Err(err),
        }
    }

    pub fn election(&self, election_id: u64) -> Result<Election, ClientError> {
        self.program.account(Election::pda(election_id).0)
    }

    pub fn candidate(
        &self,
        election_id: u64,
        candidate_id: u64,
    ) -> Result<Candidate, ClientError> {
        self.program.account(Candidate::pda(election_id, candidate_id).0)
    }

    /// Ordered candidate names and vote counts. An election without
    /// candidates yields two empty lists.
    pub fn results(&self, election_id: u64) -> Result<(Vec<String>, Vec<u64>), ClientError> {
        let election = self.election(election_id)?;
        let mut names = Vec::with_capacity(election.candidate_count as usize);
        let mut votes = Vec::with_capacity(election.candidate_count as usize);
        for candidate_id in 1..=election.candidate_count {
            let candidate = self.candidate(election_id, candidate_id)?;
            names.push(candidate.name);
            votes.push(candidate.vote_count);
        }
        Ok((names, votes))
    }

    pub fn owner(&self, election_id: u64) -> Result<Pubkey, ClientError> {
        Ok(self.election(election_id)?.authority)
    }

    // === Writes (submit, then wait for confirmed inclusion) ===

    /// Sign and submit `ixs` as one transaction, then wait for it to
    /// confirm. While one transaction from this gateway is outstanding,
    /// further mutating calls are rejected before any provider traffic.
    pub fn send(&self, mut ixs: Vec<Instruction>) -> Result<Signature> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            anyhow!("a transaction is already awaiting confirmation; retry once it settles")
        })?;

        let payer = self.program.payer();
        let blockhash = self.program.rpc().get_latest_blockhash()?;

        if let Some(lamports) = self.micro_lamports {
            ixs.insert(
                0,
                ComputeBudgetInstruction::set_compute_unit_price(lamports),
            );
        }

        let signers: &[&Keypair] = &[self.signer.as_ref()];
        let tx = Transaction::new_signed_with_payer(&ixs, Some(&payer), signers, blockhash);
        let signature = self.program.rpc().send_and_confirm_transaction(&tx)?;
        Ok(signature)
    }
}

/// Releases the gateway's in-flight slot when the submission resolves,
/// whether it confirmed or failed.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_with_missing_wallet(dir: &tempfile::TempDir) -> WalletGateway {
        WalletGateway::new(
            dir.path().join("no-such-wallet.json"),
            "http://localhost:8899".to_string(),
            None,
        )
    }

    #[test]
    fn connect_returns_none_without_a_wallet() {
        let dir = tempfile::tempdir().unwrap();
        assert!(gateway_with_missing_wallet(&dir).connect().is_none());
    }

    #[test]
    fn contract_returns_none_without_a_wallet() {
        let dir = tempfile::tempdir().unwrap();
        assert!(gateway_with_missing_wallet(&dir).contract().is_none());
    }

    #[test]
    fn connect_returns_none_for_an_unreadable_wallet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(&path, "definitely not a keypair").unwrap();

        let gateway = WalletGateway::new(path, "http://localhost:8899".to_string(), None);
        assert!(gateway.connect().is_none());
    }

    #[test]
    fn in_flight_guard_rejects_overlapping_acquires() {
        let flag = AtomicBool::new(false);

        let first = InFlightGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlightGuard::acquire(&flag).is_none());

        drop(first);
        assert!(InFlightGuard::acquire(&flag).is_some());
    }
}

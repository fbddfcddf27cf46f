use anchor_client::solana_sdk::pubkey::Pubkey;
use anyhow::{bail, Result};
use clap::Parser;
use cli::utils::*;
use cli::{rules, FsKvStore, SessionStore, WalletGateway};
use log::{info, warn};
use std::path::PathBuf;
use tokio::runtime::Builder;

#[derive(Clone, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Wallet keypair signing every operation. Missing file means no
    /// wallet is installed.
    #[arg(short, long, env, default_value = "/")]
    pub wallet_path: PathBuf,

    /// Directory holding the persisted session (the connected account).
    #[arg(short, long, env, default_value = ".voting-session")]
    pub session_dir: PathBuf,

    #[arg(short, long, env, default_value = "http://localhost:8899")]
    pub rpc_url: String,

    #[arg(long, env)]
    pub micro_lamports: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Clone)]
pub enum Commands {
    /// Select a wallet account and remember it for later commands.
    Connect {},
    /// Forget the remembered account. The wallet keeps its own approval.
    Disconnect {},
    /// Print the remembered account, if any.
    Account {},
    /// List every election with its status.
    List {},
    /// Show one election: candidates, ownership and, once ended, results.
    Show {
        #[arg(long, help = "Id of election to show")]
        id: u64,
    },
    /// Create an election with an ordered candidate list.
    CreateElection {
        #[arg(long)]
        title: String,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Comma-separated candidate names, in ballot order"
        )]
        candidates: Vec<String>,
    },
    /// Vote for one candidate in an active election.
    CastVote {
        #[arg(long, help = "Id of election")]
        id: u64,

        #[arg(long, help = "Id of candidate on that election's ballot")]
        candidate: u64,
    },
    /// End an election you created, making its results final.
    EndElection {
        #[arg(long, help = "Id of election")]
        id: u64,
    },
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(false)
        .try_init();

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    let _enter = runtime.enter();
    let cli = Cli::parse();

    let gateway = WalletGateway::new(
        cli.wallet_path.clone(),
        cli.rpc_url.clone(),
        cli.micro_lamports,
    );
    let session = SessionStore::new(FsKvStore::new(cli.session_dir.clone()));

    // Gate shared by every account-dependent command: a cleared or
    // corrupt session blocks the action before any provider traffic.
    fn require_account(session: &SessionStore<FsKvStore>) -> Option<Pubkey> {
        let account = session.connected_account();
        if account.is_none() {
            info!("No wallet connected; run `connect` first");
        }
        account
    }

    // The session may lag behind the wallet (accounts switched since the
    // last connect). Flag it; identity decisions still use the session.
    fn warn_if_stale(connected: &Pubkey, signer: &Pubkey) {
        if connected != signer {
            warn!(
                "Connected account {connected} differs from the wallet's active account {signer}; run `connect` to refresh it"
            );
        }
    }

    match cli.command {
        Commands::Connect {} => {
            if let Some(account) = gateway.connect() {
                session.save(&account.to_string());
            }
        }
        Commands::Disconnect {} => {
            session.clear();
            info!("Disconnected. The wallet itself still holds its approval; revoke it there if needed.");
        }
        Commands::Account {} => match session.get_saved() {
            Some(account) => println!("{account}"),
            None => println!("(not connected)"),
        },
        Commands::List {} => {
            let Some(_account) = require_account(&session) else {
                return Ok(());
            };
            let Some(handle) = gateway.contract() else {
                return Ok(());
            };

            let count = handle.election_count()?;
            if count == 0 {
                println!("No elections found.");
                return Ok(());
            }
            for id in 1..=count {
                let election = handle.election(id)?;
                let status = if election.active { "active" } else { "ended" };
                println!(
                    "#{} {} [{}] ({} candidates)",
                    election.id, election.title, status, election.candidate_count
                );
            }
        }
        Commands::Show { id } => {
            let Some(account) = require_account(&session) else {
                return Ok(());
            };
            let Some(handle) = gateway.contract() else {
                return Ok(());
            };
            warn_if_stale(&account, &handle.signer());

            let election = handle.election(id)?;
            let status = if election.active { "active" } else { "ended" };
            println!("#{} {} [{}]", election.id, election.title, status);

            // A failed owner lookup renders the page as non-owner.
            let owner = match handle.owner(id) {
                Ok(owner) => Some(owner),
                Err(err) => {
                    warn!("Failed to fetch election owner: {err}");
                    None
                }
            };
            if rules::is_owner(&account, owner.as_ref()) {
                println!("You created this election and may end it.");
            }

            if election.candidate_count == 0 {
                println!("No candidates registered.");
            } else {
                for candidate_id in 1..=election.candidate_count {
                    let candidate = handle.candidate(id, candidate_id)?;
                    println!(
                        "  {}. {} ({} votes)",
                        candidate.id, candidate.name, candidate.vote_count
                    );
                }
            }

            if !election.active {
                let (names, votes) = handle.results(id)?;
                println!("Final results:");
                for (name, count) in names.iter().zip(votes.iter()) {
                    println!("  {name}: {count} votes");
                }
            }
        }
        Commands::CreateElection { title, candidates } => {
            let title = title.trim().to_string();
            let candidates: Vec<String> = candidates
                .iter()
                .map(|name| name.trim().to_string())
                .collect();
            rules::validate_new_election(&title, &candidates)?;

            let Some(account) = require_account(&session) else {
                return Ok(());
            };
            let Some(handle) = gateway.contract() else {
                return Ok(());
            };
            warn_if_stale(&account, &handle.signer());

            let election_id = handle.election_count()? + 1;
            let tx = send_create_election(&handle, election_id, title, candidates)?;
            info!("Transaction sent: {tx}");
            info!("Election {election_id} created");
        }
        Commands::CastVote { id, candidate } => {
            let Some(account) = require_account(&session) else {
                return Ok(());
            };
            let Some(handle) = gateway.contract() else {
                return Ok(());
            };
            warn_if_stale(&account, &handle.signer());

            let election = handle.election(id)?;
            rules::ensure_votable(&election)?;

            let tx = send_cast_vote(&handle, id, candidate)?;
            info!("Transaction sent: {tx}");
            info!("Vote recorded for candidate {candidate} in election {id}");
        }
        Commands::EndElection { id } => {
            let Some(account) = require_account(&session) else {
                return Ok(());
            };
            let Some(handle) = gateway.contract() else {
                return Ok(());
            };
            warn_if_stale(&account, &handle.signer());

            let election = handle.election(id)?;
            rules::ensure_endable(&election)?;

            let owner = match handle.owner(id) {
                Ok(owner) => Some(owner),
                Err(err) => {
                    warn!("Failed to fetch election owner: {err}");
                    None
                }
            };
            if !rules::is_owner(&account, owner.as_ref()) {
                bail!("only the election creator can end election {id}");
            }

            let tx = send_end_election(&handle, id)?;
            info!("Transaction sent: {tx}");
            info!("Election {id} ended");
        }
    }
    Ok(())
}

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anchor_client::solana_sdk::pubkey::Pubkey;
use log::warn;

/// Key under which the connected wallet address is persisted.
pub const CONNECTED_ACCOUNT_KEY: &str = "connected_account";

/// Minimal persistence capability: one string per key.
pub trait KvStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    fn delete(&self, key: &str) -> io::Result<()>;
}

/// [`KvStore`] holding each value as a plain-text file under one directory.
pub struct FsKvStore {
    dir: PathBuf,
}

impl FsKvStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FsKvStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value.trim_end().to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// The persisted "currently connected" account, injected into every
/// command handler. The store is the source of truth across runs; the
/// wallet's own permission grant is a separate thing it keeps itself.
pub struct SessionStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the connected account, overwriting any previous value. The
    /// string is stored as-is; no address validation happens here.
    /// Storage failures are logged and swallowed.
    pub fn save(&self, account: &str) {
        if account.is_empty() {
            warn!("Refusing to persist an empty account");
            return;
        }
        if let Err(err) = self.store.set(CONNECTED_ACCOUNT_KEY, account) {
            warn!("Failed to persist connected account: {err}");
        }
    }

    pub fn get_saved(&self) -> Option<String> {
        match self.store.get(CONNECTED_ACCOUNT_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to read connected account: {err}");
                None
            }
        }
    }

    /// Remove the local record only. The wallet still holds its own
    /// approval until the user revokes it there.
    pub fn clear(&self) {
        if let Err(err) = self.store.delete(CONNECTED_ACCOUNT_KEY) {
            warn!("Failed to clear connected account: {err}");
        }
    }

    /// Saved account parsed to a key. An unparsable value counts as not
    /// connected, so identity comparisons always happen on canonical keys.
    pub fn connected_account(&self) -> Option<Pubkey> {
        let saved = self.get_saved()?;
        match Pubkey::from_str(&saved) {
            Ok(key) => Some(key),
            Err(_) => {
                warn!("Persisted account {saved:?} is not a valid address; treating as disconnected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_client::solana_sdk::signature::Keypair;
    use anchor_client::solana_sdk::signer::Signer;

    fn session_in(dir: &tempfile::TempDir) -> SessionStore<FsKvStore> {
        SessionStore::new(FsKvStore::new(dir.path().to_path_buf()))
    }

    #[test]
    fn save_then_get_saved_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);
        let address = Keypair::new().pubkey().to_string();

        session.save(&address);
        assert_eq!(session.get_saved(), Some(address));
    }

    #[test]
    fn get_saved_is_none_before_any_save_and_after_clear() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);
        assert_eq!(session.get_saved(), None);

        session.save("some-address");
        assert!(session.get_saved().is_some());

        session.clear();
        assert_eq!(session.get_saved(), None);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);

        session.save("first");
        session.save("second");
        assert_eq!(session.get_saved(), Some("second".to_string()));
    }

    #[test]
    fn clear_is_a_no_op_when_nothing_was_saved() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);
        session.clear();
        assert_eq!(session.get_saved(), None);
    }

    #[test]
    fn connected_account_rejects_a_corrupt_value() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);

        session.save("not-a-valid-address");
        assert_eq!(session.get_saved(), Some("not-a-valid-address".to_string()));
        assert_eq!(session.connected_account(), None);
    }

    #[test]
    fn connected_account_parses_a_real_address() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);
        let key = Keypair::new().pubkey();

        session.save(&key.to_string());
        assert_eq!(session.connected_account(), Some(key));
    }
}

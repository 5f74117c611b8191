//! Htpasswd-backed store
//!
//! Long-lived credential store for a running server: one synchronous parse
//! at construction, lock-guarded lookups, and a metadata-triggered reload
//! so credential changes land without a restart.

use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::error::HtpasswdError;
use crate::parser::parse_credentials;
use crate::store::metadata::FileMetadata;
use crate::verify::{BcryptVerifier, PasswordVerifier};

/// The credential map and the file signature it was parsed from, installed
/// together so a reader can never observe one without the other.
#[derive(Debug, Default)]
struct Snapshot {
    users: HashMap<String, String>,
    metadata: FileMetadata,
}

impl Snapshot {
    fn load(path: &Path) -> Result<Self, HtpasswdError> {
        let file = fs::File::open(path)?;
        let users = parse_credentials(BufReader::new(file))?;
        let metadata = FileMetadata::of(&fs::metadata(path)?)?;
        Ok(Self { users, metadata })
    }
}

/// A credential store backed by a bcrypt htpasswd file.
///
/// Construction parses the whole file up front; `authenticate` reads the
/// in-memory map; `reload` reparses only when the file's modification time
/// or size has changed. All three are safe to call from many threads at
/// once. The store spawns nothing itself; see `reloader::spawn_auto_reload`
/// for periodic reload driving.
pub struct HtpasswdFile {
    /// Suggested wait between reload checks. Advisory: consumed by the
    /// reload scheduler, never enforced here. Zero disables auto-reload.
    check_interval: Duration,
    /// Resolved absolute path of the backing file.
    path: PathBuf,
    state: Mutex<Snapshot>,
    verifier: Box<dyn PasswordVerifier>,
}

impl std::fmt::Debug for HtpasswdFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtpasswdFile")
            .field("check_interval", &self.check_interval)
            .field("path", &self.path)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl HtpasswdFile {
    /// Open an htpasswd file and parse it into a new store, verifying
    /// passwords with bcrypt.
    ///
    /// Fails if the file cannot be opened or stat'd, or if any line matches
    /// neither the comment nor the credential grammar.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HtpasswdError> {
        Self::open_with_verifier(path, Box::new(BcryptVerifier))
    }

    /// Like `open`, with a caller-supplied hash-compare primitive.
    pub fn open_with_verifier(
        path: impl AsRef<Path>,
        verifier: Box<dyn PasswordVerifier>,
    ) -> Result<Self, HtpasswdError> {
        let path = std::path::absolute(path)?;

        let store = Self {
            check_interval: Duration::ZERO,
            path,
            state: Mutex::new(Snapshot::default()),
            verifier,
        };

        {
            let mut state = store.lock_state();
            *state = Snapshot::load(&store.path)?;
            info!(
                "Loaded {} credential(s) from {}",
                state.users.len(),
                store.path.display()
            );
        }

        Ok(store)
    }

    /// Check a username and password against the stored hashes.
    ///
    /// Returns `false` uniformly for an unknown user, a malformed stored
    /// hash, or a wrong password. An absent user is looked up as an
    /// empty-string hash so the miss takes the same path, and comparable
    /// time, as a mismatch against a real user.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        // Copy the hash out so the expensive comparison runs unlocked.
        let hash = {
            let state = self.lock_state();
            state.users.get(username).cloned().unwrap_or_default()
        };

        self.verifier.verify(password, &hash)
    }

    /// Reparse the backing file if its modification time or size changed
    /// since the last successful parse.
    ///
    /// On a stat or parse failure the previous map stays installed and the
    /// error is returned; a stale store keeps answering rather than failing
    /// every authentication. Unchanged metadata is a no-op success.
    pub fn reload(&self) -> Result<(), HtpasswdError> {
        let mut state = self.lock_state();

        let observed = FileMetadata::of(&fs::metadata(&self.path)?)?;
        if observed == state.metadata {
            debug!("{} unchanged, skipping reload", self.path.display());
            return Ok(());
        }

        *state = Snapshot::load(&self.path)?;
        info!(
            "Reloaded {} credential(s) from {}",
            state.users.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Usernames currently present in the store.
    pub fn users(&self) -> Vec<String> {
        let state = self.lock_state();
        state.users.keys().cloned().collect()
    }

    /// Resolved absolute path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Suggested wait between reload checks.
    pub fn check_interval(&self) -> Duration {
        self.check_interval
    }

    /// Set the suggested wait between reload checks. Must be called before
    /// the store is handed to the reload scheduler; zero leaves auto-reload
    /// disabled.
    pub fn set_check_interval(&mut self, interval: Duration) {
        self.check_interval = interval;
    }

    /// The snapshot is only ever replaced by whole-value assignment, so a
    /// poisoned lock cannot hold a torn snapshot and is safe to recover.
    fn lock_state(&self) -> MutexGuard<'_, Snapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HASH_2A: &str = "$2a$10$3cz0nlM0jWIAs1wXcBu7XuLJjNg9Mz36RSExfwSW.0rs.xPs2Gghu";

    /// Test double: treats the stored "hash" as the expected plaintext.
    struct PlainVerifier;

    impl PasswordVerifier for PlainVerifier {
        fn verify(&self, password: &str, hash: &str) -> bool {
            !hash.is_empty() && password == hash
        }
    }

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_open_resolves_absolute_path() {
        let file = write_file(&format!("example1:{}\n", HASH_2A));
        let store = HtpasswdFile::open(file.path()).unwrap();
        assert!(store.path().is_absolute());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let err = HtpasswdFile::open("/nonexistent/htpasswd").unwrap_err();
        assert!(matches!(err, HtpasswdError::FileAccess(_)));
    }

    #[test]
    fn test_authenticate_uses_injected_verifier() {
        let file = write_file(&format!("example1:{}\n", HASH_2A));
        let store = HtpasswdFile::open_with_verifier(file.path(), Box::new(PlainVerifier)).unwrap();

        assert!(store.authenticate("example1", HASH_2A));
        assert!(!store.authenticate("example1", "something else"));
        // Unknown user: empty stand-in hash, uniform false.
        assert!(!store.authenticate("nobody", HASH_2A));
    }

    #[test]
    fn test_check_interval_defaults_to_zero() {
        let file = write_file(&format!("example1:{}\n", HASH_2A));
        let mut store = HtpasswdFile::open(file.path()).unwrap();
        assert_eq!(store.check_interval(), Duration::ZERO);

        store.set_check_interval(Duration::from_secs(30));
        assert_eq!(store.check_interval(), Duration::from_secs(30));
    }
}

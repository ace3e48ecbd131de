//! The credential slot: where the bearer token lives between requests.
//!
//! There is exactly ONE token at a time. Its presence means "possibly
//! authenticated" (the server may still reject it); its absence means
//! "definitely unauthenticated". The session store is the only writer;
//! the gateway reads it on every outgoing request.
//!
//! # Why a trait?
//!
//! Durable storage differs per deployment — a file on disk for the CLI,
//! an in-memory slot for tests. The trait keeps the gateway and session
//! store indifferent to which one is underneath.

use std::path::PathBuf;
use std::sync::Mutex;

/// The file name the token is persisted under. Fixed — there is one
/// slot, so there is one key.
const TOKEN_FILE: &str = "token";

/// A single-slot store for the opaque bearer token.
///
/// All three operations are synchronous and infallible from the
/// caller's view: persistence failures are logged, not propagated,
/// because a token that failed to persist only costs a re-login after
/// restart — it never blocks the current session.
///
/// `Send + Sync + 'static` so one store can be shared (via `Arc`)
/// between the session store (writer) and the gateway (reader) across
/// async tasks.
pub trait CredentialStore: Send + Sync + 'static {
    /// Returns the stored token, if one exists and is non-empty.
    fn load(&self) -> Option<String>;

    /// Replaces the slot with a new token.
    fn store(&self, token: &str);

    /// Empties the slot.
    fn clear(&self);
}

// ---------------------------------------------------------------------------
// FileCredentialStore
// ---------------------------------------------------------------------------

/// A [`CredentialStore`] backed by a single file on disk.
///
/// The token survives process restarts — this is what makes hydration
/// possible. The file holds the raw token and nothing else.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store that keeps its token file under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_FILE),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn store(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(%err, "could not create credential directory");
                return;
            }
        }
        if let Err(err) = std::fs::write(&self.path, token) {
            tracing::warn!(%err, "could not persist credential");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(%err, "could not remove credential file");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryCredentialStore
// ---------------------------------------------------------------------------

/// A [`CredentialStore`] that lives and dies with the process.
///
/// Used by tests and short-lived tooling where surviving a restart is
/// pointless.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().expect("credential lock poisoned").clone()
    }

    fn store(&self, token: &str) {
        *self.slot.lock().expect("credential lock poisoned") =
            Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().expect("credential lock poisoned") = None;
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load(), None);

        store.store("tok-1");
        assert_eq!(store.load().as_deref(), Some("tok-1"));

        store.store("tok-2");
        assert_eq!(store.load().as_deref(), Some("tok-2"), "single slot");

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir()
            .join(format!("slotbook-cred-{}", std::process::id()));
        let store = FileCredentialStore::new(&dir);

        assert_eq!(store.load(), None);

        store.store("tok-abc");
        assert_eq!(store.load().as_deref(), Some("tok-abc"));

        // A fresh store over the same directory sees the same token —
        // this is the restart-survival property hydration relies on.
        let rehydrated = FileCredentialStore::new(&dir);
        assert_eq!(rehydrated.load().as_deref(), Some("tok-abc"));

        store.clear();
        assert_eq!(store.load(), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_clear_when_already_empty_is_silent() {
        let dir = std::env::temp_dir()
            .join(format!("slotbook-cred-none-{}", std::process::id()));
        let store = FileCredentialStore::new(&dir);
        store.clear();
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_ignores_whitespace_and_empty_token_file() {
        let dir = std::env::temp_dir()
            .join(format!("slotbook-cred-ws-{}", std::process::id()));
        let store = FileCredentialStore::new(&dir);

        store.store("  padded-token\n");
        // Stored verbatim, loaded trimmed.
        assert_eq!(store.load().as_deref(), Some("padded-token"));

        store.store("");
        assert_eq!(store.load(), None, "empty file is no credential");

        let _ = std::fs::remove_dir_all(&dir);
    }
}

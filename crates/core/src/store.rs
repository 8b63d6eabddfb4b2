//! Session store adapters.
//!
//! The session record lives under a single well-known key. The store is an
//! injected interface rather than an ambient global so the resolver and the
//! authenticator can be exercised against an in-memory fake in tests, and so
//! a different durable backend can be substituted without touching callers.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::constants::SESSION_FILENAME;
use crate::error::{VidaError, VidaResult};
use crate::identity::{serialize_record, Identity};

/// Durable storage for the single session record.
///
/// Invariant: at most one record exists at a time; `save` overwrites any
/// prior record and `clear` is idempotent.
pub trait SessionStore: Send + Sync {
    /// Serializes the identity and writes it under the well-known key,
    /// overwriting any prior record.
    fn save(&self, identity: &Identity) -> VidaResult<()>;

    /// Reads the raw record text, or `None` if no record is stored.
    fn load(&self) -> VidaResult<Option<String>>;

    /// Removes the record. Succeeds if no record exists.
    fn clear(&self) -> VidaResult<()>;
}

/// In-memory store: the test fake, also usable for a purely in-process
/// session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Option<String>> {
        // A poisoned lock only means a panicking test thread; the stored
        // text is still valid.
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, identity: &Identity) -> VidaResult<()> {
        let json = serialize_record(identity)?;
        *self.guard() = Some(json);
        Ok(())
    }

    fn load(&self) -> VidaResult<Option<String>> {
        Ok(self.guard().clone())
    }

    fn clear(&self) -> VidaResult<()> {
        *self.guard() = None;
        Ok(())
    }
}

/// File-backed store: one `currentUser.json` file under a configured
/// directory, the durable analog of the browser's local storage.
#[derive(Clone, Debug)]
pub struct FileStore {
    session_dir: PathBuf,
}

impl FileStore {
    pub fn new(session_dir: impl Into<PathBuf>) -> Self {
        Self {
            session_dir: session_dir.into(),
        }
    }

    fn record_path(&self) -> PathBuf {
        self.session_dir.join(SESSION_FILENAME)
    }
}

impl SessionStore for FileStore {
    fn save(&self, identity: &Identity) -> VidaResult<()> {
        let json = serialize_record(identity)?;
        fs::create_dir_all(&self.session_dir).map_err(VidaError::SessionDirCreation)?;
        fs::write(self.record_path(), json).map_err(VidaError::SessionWrite)
    }

    fn load(&self) -> VidaResult<Option<String>> {
        match fs::read_to_string(self.record_path()) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(VidaError::SessionRead(err)),
        }
    }

    fn clear(&self) -> VidaResult<()> {
        match fs::remove_file(self.record_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(VidaError::SessionClear(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{resolve, SessionState};
    use crate::role::Role;
    use tempfile::TempDir;
    use vida_types::NonEmptyText;

    fn sample() -> Identity {
        Identity {
            role: Role::Admin,
            display_name: NonEmptyText::new("Dr. João Admin").unwrap(),
            avatar_url: NonEmptyText::new("https://i.ibb.co/4n9dyrfQ/22.png").unwrap(),
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(&sample()).unwrap();
        let raw = store.load().unwrap().expect("record should exist");
        assert_eq!(
            resolve(Some(&raw)),
            SessionState::Authenticated(sample())
        );
    }

    #[test]
    fn memory_store_clear_is_idempotent() {
        let store = MemoryStore::new();
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_load_is_none_when_absent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("session"));

        store.save(&sample()).unwrap();
        let raw = store.load().unwrap().expect("record should exist");
        assert_eq!(
            resolve(Some(&raw)),
            SessionState::Authenticated(sample())
        );
    }

    #[test]
    fn file_store_save_overwrites_prior_record() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.save(&sample()).unwrap();
        let second = Identity {
            role: Role::Patient,
            display_name: NonEmptyText::new("Carlos Santos").unwrap(),
            avatar_url: NonEmptyText::new("https://i.ibb.co/ns2tPQzS/21.png").unwrap(),
        };
        store.save(&second).unwrap();

        let raw = store.load().unwrap().expect("record should exist");
        assert_eq!(resolve(Some(&raw)), SessionState::Authenticated(second));
    }

    #[test]
    fn file_store_clear_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.clear().unwrap();
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}

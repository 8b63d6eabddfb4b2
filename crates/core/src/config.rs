//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into core
//! services. Environment variables are read by the consuming binary, never
//! here, so core logic behaves identically under test harnesses and
//! multi-threaded runtimes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{DEFAULT_AUTH_DELAY_MS, DEFAULT_SESSION_DIR};
use crate::error::{VidaError, VidaResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    session_dir: PathBuf,
    auth_delay: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(session_dir: PathBuf, auth_delay: Duration) -> VidaResult<Self> {
        if session_dir.as_os_str().is_empty() {
            return Err(VidaError::InvalidInput(
                "session_dir cannot be empty".into(),
            ));
        }

        Ok(Self {
            session_dir,
            auth_delay,
        })
    }

    /// Directory holding the file-backed session record.
    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    /// Simulated network round trip applied to every login attempt.
    pub fn auth_delay(&self) -> Duration {
        self.auth_delay
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
        }
    }
}

//! The mock authenticator: a static directory lookup behind a simulated
//! network round trip.
//!
//! The delay is applied uniformly, so an unknown user, a wrong password, and
//! a successful login all take the same time and the outcome leaks nothing
//! through latency. Repeated submissions are safe: every attempt takes a
//! monotonically increasing request token, and a completion that finds a
//! newer token in flight supersedes itself instead of overwriting the
//! session record.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use vida_types::NonEmptyText;

use crate::constants::MIN_SECRET_LEN;
use crate::directory::{CredentialDirectory, CredentialEntry};
use crate::error::{VidaError, VidaResult};
use crate::identity::Identity;
use crate::store::SessionStore;

/// Validates login form input before any round trip is simulated.
///
/// Mirrors the original form rules: the login key must be non-empty and the
/// secret at least [`MIN_SECRET_LEN`] characters.
///
/// # Errors
///
/// Returns [`VidaError::InvalidInput`] with a user-facing message.
pub fn validate_login_form(login_key: &str, secret: &str) -> VidaResult<()> {
    if login_key.trim().is_empty() {
        return Err(VidaError::InvalidInput(
            "login key cannot be empty".into(),
        ));
    }
    if secret.len() < MIN_SECRET_LEN {
        return Err(VidaError::InvalidInput(format!(
            "secret must be at least {MIN_SECRET_LEN} characters"
        )));
    }
    Ok(())
}

/// Mock authenticator over an injected session store.
pub struct Authenticator<'a> {
    store: &'a dyn SessionStore,
    directory: CredentialDirectory,
    delay: Duration,
    next_request: AtomicU64,
}

impl<'a> Authenticator<'a> {
    pub fn new(
        store: &'a dyn SessionStore,
        directory: CredentialDirectory,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            directory,
            delay,
            next_request: AtomicU64::new(0),
        }
    }

    /// Attempts a login.
    ///
    /// On success the derived identity is saved as the session record and
    /// returned. On failure the store is left untouched, so the prior
    /// session state survives a failed attempt.
    ///
    /// # Errors
    ///
    /// * [`VidaError::InvalidInput`] - form validation failed (no delay).
    /// * [`VidaError::InvalidCredentials`] - unknown login key or wrong
    ///   secret, reported only after the uniform delay.
    /// * [`VidaError::Superseded`] - a newer attempt started while this one
    ///   was in flight.
    pub async fn authenticate(&self, login_key: &str, secret: &str) -> VidaResult<Identity> {
        validate_login_form(login_key, secret)?;

        let token = self.next_request.fetch_add(1, Ordering::SeqCst) + 1;

        // The outcome is computed up front but revealed only after the
        // delay, keeping latency identical across all outcomes.
        let entry = self
            .directory
            .lookup(login_key)
            .filter(|_| secret == self.directory.shared_secret());

        tokio::time::sleep(self.delay).await;

        if self.next_request.load(Ordering::SeqCst) != token {
            tracing::debug!(login_key, "login attempt superseded");
            return Err(VidaError::Superseded);
        }

        let entry = match entry {
            Some(entry) => entry,
            None => {
                tracing::info!(login_key, "login rejected");
                return Err(VidaError::InvalidCredentials);
            }
        };

        let identity = identity_from_entry(entry)?;
        self.store.save(&identity)?;
        tracing::info!(login_key, role = %identity.role, "login succeeded");
        Ok(identity)
    }
}

fn identity_from_entry(entry: &CredentialEntry) -> VidaResult<Identity> {
    let display_name = NonEmptyText::new(&entry.display_name).map_err(|_| {
        VidaError::InvalidInput(format!(
            "directory entry '{}' has an empty display name",
            entry.login_key
        ))
    })?;
    let avatar_url = NonEmptyText::new(&entry.avatar_url).map_err(|_| {
        VidaError::InvalidInput(format!(
            "directory entry '{}' has an empty avatar reference",
            entry.login_key
        ))
    })?;
    Ok(Identity {
        role: entry.role,
        display_name,
        avatar_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{resolve, SessionState};
    use crate::role::Role;
    use crate::store::MemoryStore;

    const NO_DELAY: Duration = Duration::ZERO;

    fn authenticator(store: &MemoryStore) -> Authenticator<'_> {
        Authenticator::new(store, CredentialDirectory::default(), NO_DELAY)
    }

    #[test]
    fn form_validation_rejects_empty_login_and_short_secret() {
        assert!(matches!(
            validate_login_form("", "123456"),
            Err(VidaError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_login_form("admin@vidaplus.com", "12345"),
            Err(VidaError::InvalidInput(_))
        ));
        assert!(validate_login_form("admin@vidaplus.com", "123456").is_ok());
    }

    #[tokio::test]
    async fn unknown_login_key_is_rejected() {
        let store = MemoryStore::new();
        let auth = authenticator(&store);
        let result = auth.authenticate("nobody@vidaplus.com", "123456").await;
        assert!(matches!(result, Err(VidaError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let store = MemoryStore::new();
        let auth = authenticator(&store);
        let result = auth.authenticate("medico@vidaplus.com", "errada1").await;
        assert!(matches!(result, Err(VidaError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn success_persists_the_directory_identity() {
        let store = MemoryStore::new();
        let auth = authenticator(&store);

        let identity = auth
            .authenticate("medico@vidaplus.com", "123456")
            .await
            .unwrap();
        assert_eq!(identity.role, Role::Professional);
        assert_eq!(identity.display_name.as_str(), "Dra. Maria Silva");
        assert_eq!(
            identity.avatar_url.as_str(),
            "https://i.postimg.cc/rsj9f97v/16.png"
        );

        let raw = store.load().unwrap().expect("session should be persisted");
        assert_eq!(resolve(Some(&raw)), SessionState::Authenticated(identity));
    }

    #[tokio::test]
    async fn failed_login_leaves_prior_session_intact() {
        let store = MemoryStore::new();
        let auth = authenticator(&store);

        auth.authenticate("medico@vidaplus.com", "123456")
            .await
            .unwrap();
        let before = store.load().unwrap();

        let result = auth.authenticate("medico@vidaplus.com", "errada1").await;
        assert!(matches!(result, Err(VidaError::InvalidCredentials)));
        assert_eq!(store.load().unwrap(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_uniform_across_outcomes() {
        let store = MemoryStore::new();
        let delay = Duration::from_millis(2000);
        let auth = Authenticator::new(&store, CredentialDirectory::default(), delay);

        let start = tokio::time::Instant::now();
        auth.authenticate("medico@vidaplus.com", "123456")
            .await
            .unwrap();
        assert_eq!(start.elapsed(), delay);

        let start = tokio::time::Instant::now();
        let _ = auth.authenticate("nobody@vidaplus.com", "123456").await;
        assert_eq!(start.elapsed(), delay);

        let start = tokio::time::Instant::now();
        let _ = auth.authenticate("medico@vidaplus.com", "errada1").await;
        assert_eq!(start.elapsed(), delay);
    }

    #[tokio::test]
    async fn resubmission_supersedes_the_older_attempt() {
        let store = MemoryStore::new();
        let auth = Authenticator::new(
            &store,
            CredentialDirectory::default(),
            Duration::from_millis(20),
        );

        let (first, second) = tokio::join!(
            auth.authenticate("medico@vidaplus.com", "123456"),
            auth.authenticate("admin@vidaplus.com", "123456"),
        );

        assert!(matches!(first, Err(VidaError::Superseded)));
        let identity = second.unwrap();
        assert_eq!(identity.role, Role::Admin);

        // Only the newer attempt reached the store.
        let raw = store.load().unwrap().expect("session should be persisted");
        assert_eq!(resolve(Some(&raw)), SessionState::Authenticated(identity));
    }
}

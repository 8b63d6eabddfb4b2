//! Page-level session lifecycle.
//!
//! Every protected page starts in [`Mount::Loading`], consults the store
//! once, and ends in exactly one of the two terminal states. Leaving
//! `Authenticated` happens only through an explicit [`logout`]. The router
//! collaborator receives a path string and nothing else.

use crate::constants::LOGIN_PATH;
use crate::error::VidaResult;
use crate::identity::{resolve, Identity, SessionState};
use crate::navigation::{derive, Navigation};
use crate::store::SessionStore;

/// State of one protected-page mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mount {
    /// Initial state, before the store has been consulted.
    Loading,
    /// No valid session; the caller must navigate to `redirect`.
    Unauthenticated { redirect: &'static str },
    /// A valid session with its derived navigation surface.
    Authenticated {
        identity: Identity,
        navigation: Navigation,
    },
}

/// Resolves the session for a page mount.
///
/// Runs once per mount: load, resolve, derive. A store read failure is
/// treated like an absent record (fail closed), so the only error a mount
/// can surface is the fatal navigation configuration error.
pub fn mount(store: &dyn SessionStore) -> VidaResult<Mount> {
    let raw = match store.load() {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("session load failed, treating as unauthenticated: {err}");
            None
        }
    };

    match resolve(raw.as_deref()) {
        SessionState::Authenticated(identity) => {
            let navigation = derive(&identity)?;
            Ok(Mount::Authenticated {
                identity,
                navigation,
            })
        }
        SessionState::Unauthenticated => Ok(Mount::Unauthenticated {
            redirect: LOGIN_PATH,
        }),
    }
}

/// Clears the session record and returns the path to redirect to.
///
/// Idempotent: logging out twice is not an error.
pub fn logout(store: &dyn SessionStore) -> VidaResult<&'static str> {
    store.clear()?;
    tracing::info!("session cleared");
    Ok(LOGIN_PATH)
}

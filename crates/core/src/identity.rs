//! The resolved identity, its serialized session-record form, and the
//! session resolver.
//!
//! The resolver is pure and synchronous; it performs no I/O (that is the
//! store adapter's job), so it can be tested with literal strings.

use serde::{Deserialize, Serialize};
use vida_types::NonEmptyText;

use crate::error::{VidaError, VidaResult};
use crate::role::Role;

/// The validated representation of who is currently using the application.
///
/// Created by the authenticator on a successful credential check, persisted
/// as the sole content of the session record, and destroyed on logout or on
/// validation failure. Wire field names (`tipo`, `nome`, `avatarUrl`) match
/// the browser front end's record so the two stay interchangeable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(rename = "nome")]
    pub display_name: NonEmptyText,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: NonEmptyText,
}

/// Outcome of resolving raw session text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Serializes an identity into session-record text.
pub fn serialize_record(identity: &Identity) -> VidaResult<String> {
    serde_json::to_string(identity).map_err(VidaError::Serialization)
}

/// Resolves raw stored text into a session state.
///
/// Fail closed: an absent record, unparseable text, an unknown role tag, or
/// a missing/empty required field all yield
/// [`SessionState::Unauthenticated`]. A corrupted record is logged and then
/// treated exactly like no record at all; it is never surfaced as an error
/// and can never grant access.
pub fn resolve(raw: Option<&str>) -> SessionState {
    let Some(raw) = raw else {
        return SessionState::Unauthenticated;
    };

    match serde_json::from_str::<Identity>(raw) {
        Ok(identity) => SessionState::Authenticated(identity),
        Err(err) => {
            tracing::warn!("discarding malformed session record: {err}");
            SessionState::Unauthenticated
        }
    }
}

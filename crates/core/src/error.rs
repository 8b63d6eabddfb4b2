use crate::role::Role;

/// Error taxonomy for the session and navigation core.
///
/// A corrupted session record is deliberately *not* an error here: the
/// resolver coerces it to [`SessionState::Unauthenticated`] so corrupted
/// local state can never grant access and never surfaces to the user.
///
/// [`SessionState::Unauthenticated`]: crate::identity::SessionState
#[derive(Debug, thiserror::Error)]
pub enum VidaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Authentication rejected. User-visible, non-fatal; retry is allowed.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// A newer login attempt started while this one was in flight; the stale
    /// completion did not touch the session record.
    #[error("login attempt superseded by a newer attempt")]
    Superseded,
    #[error("failed to create session directory: {0}")]
    SessionDirCreation(std::io::Error),
    #[error("failed to write session record: {0}")]
    SessionWrite(std::io::Error),
    #[error("failed to read session record: {0}")]
    SessionRead(std::io::Error),
    #[error("failed to remove session record: {0}")]
    SessionClear(std::io::Error),
    #[error("failed to serialize session record: {0}")]
    Serialization(serde_json::Error),
    /// Fatal configuration error: a role's navigation table has no entries.
    /// Unreachable with the static table; no recovery is attempted.
    #[error("navigation table has no entries for role {role}")]
    EmptyNavigation { role: Role },
}

pub type VidaResult<T> = std::result::Result<T, VidaError>;

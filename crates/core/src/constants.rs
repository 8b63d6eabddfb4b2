//! Constants used throughout the VidaPlus core crate.
//!
//! This module pins the well-known storage key, the unauthenticated entry
//! point, and the mock-login parameters in one place so the session adapter,
//! the authenticator, and the lifecycle code cannot drift apart.

/// Well-known key under which the single session record is stored.
///
/// The value matches the browser front end's localStorage key so a record
/// written by either side resolves identically.
pub const SESSION_KEY: &str = "currentUser";

/// Filename used by the file-backed session store (`<SESSION_KEY>.json`).
pub const SESSION_FILENAME: &str = "currentUser.json";

/// Unauthenticated entry point. Every failed mount and every logout
/// redirects here.
pub const LOGIN_PATH: &str = "/";

/// Default simulated network round trip for the mock authenticator, in
/// milliseconds. Applied uniformly to successful and failed attempts.
pub const DEFAULT_AUTH_DELAY_MS: u64 = 2000;

/// Minimum accepted secret length, mirroring the login form rule.
pub const MIN_SECRET_LEN: usize = 6;

/// Fixed system-wide test password shared by every directory entry.
pub const SHARED_TEST_SECRET: &str = "123456";

/// Default directory for the session record when no explicit directory is
/// configured.
pub const DEFAULT_SESSION_DIR: &str = "session_data";

//! The static credential directory used by the mock authenticator.
//!
//! This stands in for a real user database. Entries are configuration, not
//! persisted state, and every entry shares the single fixed test password.

use crate::constants::SHARED_TEST_SECRET;
use crate::role::Role;

/// One mock login. Never persisted; only the derived [`Identity`] is.
///
/// [`Identity`]: crate::identity::Identity
#[derive(Clone, Debug)]
pub struct CredentialEntry {
    /// Email or national ID the user types into the login form.
    pub login_key: String,
    pub role: Role,
    pub display_name: String,
    pub avatar_url: String,
}

/// Static mapping from login key to directory entry, plus the shared secret.
#[derive(Clone, Debug)]
pub struct CredentialDirectory {
    entries: Vec<CredentialEntry>,
    shared_secret: String,
}

impl CredentialDirectory {
    pub fn new(entries: Vec<CredentialEntry>, shared_secret: impl Into<String>) -> Self {
        Self {
            entries,
            shared_secret: shared_secret.into(),
        }
    }

    /// Looks up an entry by its login key.
    pub fn lookup(&self, login_key: &str) -> Option<&CredentialEntry> {
        self.entries.iter().find(|e| e.login_key == login_key)
    }

    pub fn shared_secret(&self) -> &str {
        &self.shared_secret
    }

    pub fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }
}

impl Default for CredentialDirectory {
    /// The test users shipped with the original login screen.
    fn default() -> Self {
        Self::new(
            vec![
                CredentialEntry {
                    login_key: "admin@vidaplus.com".into(),
                    role: Role::Admin,
                    display_name: "Dr. João Admin".into(),
                    avatar_url: "https://i.ibb.co/4n9dyrfQ/22.png".into(),
                },
                CredentialEntry {
                    login_key: "medico@vidaplus.com".into(),
                    role: Role::Professional,
                    display_name: "Dra. Maria Silva".into(),
                    avatar_url: "https://i.postimg.cc/rsj9f97v/16.png".into(),
                },
                CredentialEntry {
                    login_key: "12345678900".into(),
                    role: Role::Patient,
                    display_name: "Carlos Santos".into(),
                    avatar_url: "https://i.ibb.co/ns2tPQzS/21.png".into(),
                },
            ],
            SHARED_TEST_SECRET,
        )
    }
}

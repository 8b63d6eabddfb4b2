//! Role navigation tables and the navigation deriver.
//!
//! Each role has a statically configured, ordered menu and an explicit home
//! path. The home path is a named field rather than "first entry in the
//! list" so reordering a menu cannot silently change a role's landing page;
//! a test pins the convention that the home entry stays first.

use vida_types::NonEmptyText;

use crate::error::{VidaError, VidaResult};
use crate::identity::Identity;
use crate::role::Role;

/// One selectable destination in a role's menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Route identifier, unique within a role's list.
    pub path: &'static str,
    /// Display text.
    pub label: &'static str,
    /// Opaque reference to a presentation icon.
    pub icon: &'static str,
}

/// The static navigation configuration for one role.
#[derive(Debug)]
pub struct RoleNavigation {
    /// Canonical landing page after login.
    pub home_path: &'static str,
    /// Ordered menu entries.
    pub entries: &'static [NavEntry],
}

const PATIENT_NAV: RoleNavigation = RoleNavigation {
    home_path: "/dashboard-paciente",
    entries: &[
        NavEntry {
            path: "/dashboard-paciente",
            label: "Início",
            icon: "fa-home",
        },
        NavEntry {
            path: "/agendamentos",
            label: "Agendamentos",
            icon: "fa-calendar-alt",
        },
        NavEntry {
            path: "/historico",
            label: "Histórico",
            icon: "fa-file-medical",
        },
        NavEntry {
            path: "/telemedicina",
            label: "Telemedicina",
            icon: "fa-video",
        },
    ],
};

const PROFESSIONAL_NAV: RoleNavigation = RoleNavigation {
    home_path: "/dashboard-profissional",
    entries: &[
        NavEntry {
            path: "/dashboard-profissional",
            label: "Início",
            icon: "fa-home",
        },
        NavEntry {
            path: "/agenda",
            label: "Agenda",
            icon: "fa-calendar-alt",
        },
        NavEntry {
            path: "/pacientes",
            label: "Pacientes",
            icon: "fa-users",
        },
        NavEntry {
            path: "/telemedicina",
            label: "Telemedicina",
            icon: "fa-video",
        },
    ],
};

const ADMIN_NAV: RoleNavigation = RoleNavigation {
    home_path: "/dashboard-admin",
    entries: &[
        NavEntry {
            path: "/dashboard-admin",
            label: "Início",
            icon: "fa-home",
        },
        NavEntry {
            path: "/usuarios",
            label: "Usuários",
            icon: "fa-users",
        },
        NavEntry {
            path: "/leitos",
            label: "Leitos",
            icon: "fa-bed",
        },
        NavEntry {
            path: "/relatorios",
            label: "Relatórios",
            icon: "fa-chart-bar",
        },
        NavEntry {
            path: "/sistema",
            label: "Sistema",
            icon: "fa-cog",
        },
    ],
};

/// Static lookup of a role's navigation configuration.
///
/// Exhaustive over [`Role`], so there is no failure mode: an unknown role is
/// a construction-time impossibility, not a runtime branch.
pub fn role_navigation(role: Role) -> &'static RoleNavigation {
    match role {
        Role::Patient => &PATIENT_NAV,
        Role::Professional => &PROFESSIONAL_NAV,
        Role::Admin => &ADMIN_NAV,
    }
}

/// Everything the header/menu consumer needs to render for one identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub entries: &'static [NavEntry],
    pub home_path: &'static str,
    pub display_name: NonEmptyText,
    pub avatar_url: NonEmptyText,
}

/// Derives the navigation surface for a resolved identity.
///
/// Entries and home path come from the role table; the display fields pass
/// through unchanged from the identity.
///
/// # Errors
///
/// Returns [`VidaError::EmptyNavigation`] if the role's table has no entries.
/// This is a fatal configuration error that should abort rendering of the
/// affected view; it cannot occur with the static tables above.
pub fn derive(identity: &Identity) -> VidaResult<Navigation> {
    let nav = role_navigation(identity.role);
    if nav.entries.is_empty() {
        return Err(VidaError::EmptyNavigation {
            role: identity.role,
        });
    }
    Ok(Navigation {
        entries: nav.entries,
        home_path: nav.home_path,
        display_name: identity.display_name.clone(),
        avatar_url: identity.avatar_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            role,
            display_name: NonEmptyText::new("Teste da Silva").unwrap(),
            avatar_url: NonEmptyText::new("https://example.com/a.png").unwrap(),
        }
    }

    #[test]
    fn every_role_has_entries() {
        for role in Role::ALL {
            assert!(!role_navigation(role).entries.is_empty());
        }
    }

    #[test]
    fn home_path_is_the_first_entry() {
        // The explicit home_path field and the menu order must agree: the
        // landing page is always listed first.
        for role in Role::ALL {
            let nav = role_navigation(role);
            assert_eq!(nav.home_path, nav.entries[0].path);
        }
    }

    #[test]
    fn paths_are_unique_within_a_role() {
        for role in Role::ALL {
            let nav = role_navigation(role);
            let mut paths: Vec<_> = nav.entries.iter().map(|e| e.path).collect();
            paths.sort_unstable();
            paths.dedup();
            assert_eq!(paths.len(), nav.entries.len());
        }
    }

    #[test]
    fn derive_returns_the_role_home_path() {
        assert_eq!(
            derive(&identity(Role::Patient)).unwrap().home_path,
            "/dashboard-paciente"
        );
        assert_eq!(
            derive(&identity(Role::Professional)).unwrap().home_path,
            "/dashboard-profissional"
        );
        assert_eq!(
            derive(&identity(Role::Admin)).unwrap().home_path,
            "/dashboard-admin"
        );
    }

    #[test]
    fn derive_passes_display_fields_through() {
        let id = identity(Role::Admin);
        let nav = derive(&id).unwrap();
        assert_eq!(nav.display_name, id.display_name);
        assert_eq!(nav.avatar_url, id.avatar_url);
    }
}

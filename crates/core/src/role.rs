use serde::{Deserialize, Serialize};

/// The fixed user category controlling which navigation entries and home
/// page apply.
///
/// The set is closed: session records carrying any other tag fail to parse
/// and are discarded by the resolver, so an "unknown role" cannot exist past
/// construction. Serialized tags are the front end's original values
/// (`paciente`, `profissional`, `admin`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "paciente")]
    Patient,
    #[serde(rename = "profissional")]
    Professional,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// All roles, in directory order.
    pub const ALL: [Role; 3] = [Role::Patient, Role::Professional, Role::Admin];

    /// The serialized tag for this role.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Patient => "paciente",
            Role::Professional => "profissional",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_original_tags() {
        assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"paciente\"");
        assert_eq!(
            serde_json::to_string(&Role::Professional).unwrap(),
            "\"profissional\""
        );
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn unknown_tag_fails_to_parse() {
        let result: Result<Role, _> = serde_json::from_str("\"gerente\"");
        assert!(result.is_err());
    }

    #[test]
    fn tags_round_trip() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }
}

use serde::{Deserialize, Serialize};

/// The four role tracks a résumé can be scored against.
/// Deserialized straight from the `:role` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Backend,
    Frontend,
    Pm,
    Designer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Backend, Role::Frontend, Role::Pm, Role::Designer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Backend => "backend",
            Role::Frontend => "frontend",
            Role::Pm => "pm",
            Role::Designer => "designer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserializes_from_path_segment() {
        for role in Role::ALL {
            let parsed: Role = serde_json::from_str(&format!("\"{}\"", role.as_str())).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(serde_json::from_str::<Role>(r#""devops""#).is_err());
    }
}

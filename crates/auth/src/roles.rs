use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role identifier used for RBAC.
///
/// The set is closed and shared with the backend as an external contract:
/// both sides serialize roles as the lowercase strings below, and adding a
/// variant here without a matching backend change breaks that contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Implicit wildcard: bypasses every allow-list.
    Superadmin,
    Admin,
    Manager,
    Accountant,
    Sales,
    Inventory,
    Purchasing,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Superadmin,
        Role::Admin,
        Role::Manager,
        Role::Accountant,
        Role::Sales,
        Role::Inventory,
        Role::Purchasing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Accountant => "accountant",
            Role::Sales => "sales",
            Role::Inventory => "inventory",
            Role::Purchasing => "purchasing",
        }
    }

    /// Whether this is the super-role with implicit universal access.
    pub fn is_super(&self) -> bool {
        matches!(self, Role::Superadmin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_wire_form() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_a_parse_error() {
        assert!("root".parse::<Role>().is_err());
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
        // The wire form is lowercase only.
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn only_superadmin_is_super() {
        for role in Role::ALL {
            assert_eq!(role.is_super(), role == Role::Superadmin);
        }
    }
}

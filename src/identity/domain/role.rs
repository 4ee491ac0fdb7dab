//! Role hierarchy.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role tag carried by every user.
///
/// Variants are declared in rank order, so the derived [`Ord`] matches the
/// hierarchy `employee < manager < ceo < admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Individual contributor.
    Employee,
    /// Team lead; may create and edit tasks.
    Manager,
    /// Executive; may also administer users.
    Ceo,
    /// System administrator.
    Admin,
}

impl Role {
    /// All roles in ascending rank order.
    pub const ALL: [Self; 4] = [Self::Employee, Self::Manager, Self::Ceo, Self::Admin];

    /// Returns the position of the role in the hierarchy.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Employee => 0,
            Self::Manager => 1,
            Self::Ceo => 2,
            Self::Admin => 3,
        }
    }

    /// Returns `true` when this role ranks at or above `other`.
    #[must_use]
    pub const fn is_at_least(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Ceo => "ceo",
            Self::Admin => "admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            "ceo" => Ok(Self::Ceo),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! User roles.
//!
//! Two-tier model: admins manage reference data (venues, hardware, themes,
//! users); members get read/write on planning content. Enforcement lives in
//! the surrounding application layer, not here.

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";

/// All valid role strings.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MEMBER];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            ROLE_ADMIN => Ok(Self::Admin),
            ROLE_MEMBER => Ok(Self::Member),
            _ => Err(format!(
                "Invalid role '{s}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Member => ROLE_MEMBER,
        }
    }
}

/// Validate that a role string is valid.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

//! User roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumString;

/// Closed set of console roles.
///
/// Role claims arrive as free-form strings from the auth session;
/// [`Role::from_claim`] maps them case-insensitively and sends everything
/// else to [`Role::Unrecognized`], which the policy table resolves to its
/// fallback role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Manager,
    Cashier,
    Tech,
    #[strum(disabled)]
    Unrecognized,
}

impl Role {
    /// Every role with its own policy entry.
    pub const KNOWN: [Role; 4] = [Role::Admin, Role::Manager, Role::Cashier, Role::Tech];

    /// Normalizes a role claim. Absent, blank and unknown claims are `Unrecognized`.
    pub fn from_claim(claim: Option<&str>) -> Self {
        claim
            .map(str::trim)
            .and_then(|value| Role::from_str(value).ok())
            .unwrap_or(Role::Unrecognized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Cashier => "CASHIER",
            Role::Tech => "TECH",
            Role::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Unrecognized)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! User reference - the projection of an external account consumed by the core

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marketplace account role, assigned by the external accounts system.
///
/// Roles are opaque to the messaging core except for the conversation
/// policy: two holders of the same non-admin role may not converse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Back-office staff; may converse with anyone, including other admins
    Admin,
    /// A regular storefront account (seller side)
    Standard,
    /// The opposite side of the marketplace (buyer side)
    Counterpart,
}

impl AccountRole {
    /// Database / wire encoding of the role
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Standard => "standard",
            Self::Counterpart => "counterpart",
        }
    }

    /// Parse the database encoding
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "standard" => Some(Self::Standard),
            "counterpart" => Some(Self::Counterpart),
            _ => None,
        }
    }

    /// Check if this is the admin role
    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the messaging core knows about a user: identity and role.
///
/// Account storage lives in the external accounts system; this is the
/// read-only view resolved through [`crate::traits::UserDirectory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
    pub role: AccountRole,
}

impl UserRef {
    /// Create a new UserRef
    #[must_use]
    pub fn new(id: Uuid, role: AccountRole) -> Self {
        Self { id, role }
    }
}

//! Conversation authorization policy
//!
//! Pure role-pair predicate, kept free of persistence so the rule set can
//! be tested exhaustively in isolation.

use crate::entities::AccountRole;
use crate::error::DomainError;

/// Decide whether two account roles may converse.
///
/// A conversation is denied exactly when both roles are equal and neither
/// is admin: admins may converse with anyone, and any two distinct
/// non-admin roles may converse. Symmetric by construction.
#[inline]
#[must_use]
pub fn can_converse(a: AccountRole, b: AccountRole) -> bool {
    a != b || a.is_admin()
}

/// Policy check that surfaces a denial as an authorization error
pub fn check_converse(a: AccountRole, b: AccountRole) -> Result<(), DomainError> {
    if can_converse(a, b) {
        Ok(())
    } else {
        Err(DomainError::RolePairDenied { a, b })
    }
}

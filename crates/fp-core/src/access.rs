//! Single capability check consumed by the route guard and every screen.

use crate::Identity;

use serde::{Deserialize, Serialize};

/// Minimum privilege a route or operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    /// Any logged-in user.
    Authenticated,
    /// Superuser accounts only.
    Admin,
}

/// Whether `identity` satisfies `required`.
///
/// No identity never satisfies anything; admin routes additionally require
/// the superuser flag.
pub fn can_access(identity: Option<&Identity>, required: AccessLevel) -> bool {
    match (identity, required) {
        (None, _) => false,
        (Some(_), AccessLevel::Authenticated) => true,
        (Some(identity), AccessLevel::Admin) => identity.is_superuser,
    }
}

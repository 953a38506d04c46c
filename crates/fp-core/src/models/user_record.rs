//! Backend representation of an account, as listed by the users endpoint.

use serde::{Deserialize, Serialize};

/// Editable profile fields nested under a user record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub form_link1: Option<String>,
    #[serde(default)]
    pub form_link2: Option<String>,
    #[serde(default)]
    pub form_link3: Option<String>,
    #[serde(default)]
    pub powerbi_link: Option<String>,
}

/// One account as returned by `GET /api/accounts/users/`.
///
/// `profile` is absent for accounts that never had one created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl UserRecord {
    /// Profile with absent treated as all-empty, the way screens render it.
    pub fn profile_or_default(&self) -> UserProfile {
        self.profile.clone().unwrap_or_default()
    }
}

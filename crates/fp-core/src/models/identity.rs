//! Identity - the authenticated user's profile record held client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of form-link slots a user can have assigned.
pub const FORM_LINK_SLOTS: usize = 3;

/// The authenticated user's profile, merged from the login response and the
/// session-resolution response. One identity exists at a time; a new login
/// overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub is_superuser: bool,
    pub powerbi_link: Option<String>,
    /// Up to three published-form links, in slot order.
    pub form_links: [Option<String>; FORM_LINK_SLOTS],
    pub logged_in_at: DateTime<Utc>,
}

impl Identity {
    /// Form link at 1-based slot `n`, if assigned and non-empty.
    pub fn form_link(&self, n: usize) -> Option<&str> {
        if n == 0 || n > FORM_LINK_SLOTS {
            return None;
        }
        self.form_links[n - 1]
            .as_deref()
            .filter(|link| !link.is_empty())
    }

    /// Assigned form links with their 1-based slot numbers.
    pub fn assigned_form_links(&self) -> impl Iterator<Item = (usize, &str)> {
        self.form_links
            .iter()
            .enumerate()
            .filter_map(|(i, link)| match link.as_deref() {
                Some(url) if !url.is_empty() => Some((i + 1, url)),
                _ => None,
            })
    }

    /// Name shown to the user: username when set, email otherwise.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }

    pub fn has_dashboard(&self) -> bool {
        self.powerbi_link
            .as_deref()
            .is_some_and(|link| !link.is_empty())
    }
}

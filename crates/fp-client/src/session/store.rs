//! In-memory session state backed by the durable identity slot.

use crate::api::auth::{AuthApi, LoginResponse, SessionResponse};
use crate::api::users::non_empty;
use crate::session::slot;
use crate::{ClientError, ClientResult};

use fp_core::Identity;

use std::path::PathBuf;

use chrono::Utc;
use log::warn;

/// What the route guard sees: hydration still pending, or a settled
/// (possibly absent) identity.
#[derive(Debug, Clone, Copy)]
pub enum SessionView<'a> {
    Loading,
    Ready(Option<&'a Identity>),
}

/// Holds the authenticated identity in memory and mirrors it into one
/// durable slot. Many screens read it; only login/logout write it.
pub struct SessionStore {
    slot_path: PathBuf,
    identity: Option<Identity>,
    hydrated: bool,
}

impl SessionStore {
    /// A store that has not yet looked at durable storage. Guards render a
    /// loading placeholder until `hydrate()` runs.
    pub fn new(slot_path: PathBuf) -> Self {
        Self {
            slot_path,
            identity: None,
            hydrated: false,
        }
    }

    /// Create and hydrate in one step.
    pub fn open(slot_path: PathBuf) -> Self {
        let mut store = Self::new(slot_path);
        store.hydrate();
        store
    }

    /// Load the identity from durable storage. A missing or unparsable slot
    /// yields an unauthenticated state, never an error.
    pub fn hydrate(&mut self) {
        let loaded = slot::load(&self.slot_path);
        if let Some(reason) = loaded.corruption {
            warn!("Starting unauthenticated: stored identity unusable ({reason})");
        }
        self.identity = loaded.identity;
        self.hydrated = true;
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn view(&self) -> SessionView<'_> {
        if self.hydrated {
            SessionView::Ready(self.identity.as_ref())
        } else {
            SessionView::Loading
        }
    }

    /// Authenticate against the backend and resolve the full identity.
    ///
    /// Two calls: credentials first, then the extended profile. A response
    /// marked unsuccessful fails with `AuthenticationFailed` and leaves the
    /// store exactly as it was; a failing second call fails with
    /// `SessionResolutionFailed`. On success the merged identity replaces
    /// whatever the slot held before.
    pub async fn login<A: AuthApi + Sync>(
        &mut self,
        api: &A,
        email: &str,
        password: &str,
    ) -> ClientResult<&Identity> {
        let login = api.login(email, password).await?;
        if !login.success {
            let message = login
                .error
                .unwrap_or_else(|| "invalid credentials".to_string());
            return Err(ClientError::authentication_failed(message));
        }

        let session = api.session(email).await?;
        let identity = merge_identity(email, login, session);

        slot::save(&self.slot_path, &identity)?;
        self.hydrated = true;
        Ok(self.identity.insert(identity))
    }

    /// Drop the identity from memory and durable storage together.
    ///
    /// Never fails: a slot that cannot be removed is logged and the
    /// in-memory state is cleared regardless.
    pub fn logout(&mut self) {
        self.identity = None;
        self.hydrated = true;
        if let Err(e) = slot::clear(&self.slot_path) {
            warn!(
                "Could not remove identity slot at {:?}: {e}",
                self.slot_path
            );
        }
    }
}

/// One identity from the two backend responses. The session response is
/// authoritative; the login response fills the gaps.
fn merge_identity(email: &str, login: LoginResponse, session: SessionResponse) -> Identity {
    let resolved_email = if !session.email.is_empty() {
        session.email
    } else {
        login.email.unwrap_or_else(|| email.to_string())
    };

    Identity {
        id: session.id,
        email: resolved_email,
        username: session.username,
        is_superuser: session.is_superuser || login.is_superuser,
        powerbi_link: non_empty(session.powerbi_link),
        form_links: [
            non_empty(session.form_link1),
            non_empty(session.form_link2),
            non_empty(session.form_link3),
        ],
        logged_in_at: Utc::now(),
    }
}

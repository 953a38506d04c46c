//! Route guard: the predicate gate in front of protected screens.

use fp_client::SessionView;
use fp_core::{AccessLevel, can_access};

/// Outcome of guarding one navigation attempt.
///
/// `Loading` while session hydration has not settled; after that the
/// decision is terminal for the render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render a placeholder, the session store has not finished hydrating.
    Loading,
    /// Render the wrapped screen.
    Authorized,
    /// Send the user to the login screen. "Not logged in" and "logged in
    /// without the required privilege" both land here, undistinguished.
    RedirectToLogin,
}

/// Decide whether the current session may enter a route requiring `required`.
pub fn decide(required: AccessLevel, session: SessionView<'_>) -> RouteDecision {
    match session {
        SessionView::Loading => RouteDecision::Loading,
        SessionView::Ready(identity) => {
            if can_access(identity, required) {
                RouteDecision::Authorized
            } else {
                RouteDecision::RedirectToLogin
            }
        }
    }
}

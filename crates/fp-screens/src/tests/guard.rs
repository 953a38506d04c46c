use crate::RouteDecision;
use crate::guard::decide;
use crate::tests::identity;

use fp_client::{SessionStore, SessionView};
use fp_core::AccessLevel;

#[test]
fn test_loading_session_renders_placeholder() {
    assert_eq!(
        decide(AccessLevel::Authenticated, SessionView::Loading),
        RouteDecision::Loading
    );
    assert_eq!(
        decide(AccessLevel::Admin, SessionView::Loading),
        RouteDecision::Loading
    );
}

#[test]
fn test_no_identity_redirects() {
    assert_eq!(
        decide(AccessLevel::Authenticated, SessionView::Ready(None)),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn test_regular_user_on_admin_route_redirects() {
    let user = identity(false);

    assert_eq!(
        decide(AccessLevel::Authenticated, SessionView::Ready(Some(&user))),
        RouteDecision::Authorized
    );
    // Insufficient privilege lands on the same redirect as "not logged in".
    assert_eq!(
        decide(AccessLevel::Admin, SessionView::Ready(Some(&user))),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn test_admin_passes_both_levels() {
    let admin = identity(true);

    assert_eq!(
        decide(AccessLevel::Authenticated, SessionView::Ready(Some(&admin))),
        RouteDecision::Authorized
    );
    assert_eq!(
        decide(AccessLevel::Admin, SessionView::Ready(Some(&admin))),
        RouteDecision::Authorized
    );
}

#[test]
fn test_after_logout_protected_routes_redirect() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(dir.path().join("identity.json"));

    store.logout();

    assert_eq!(
        decide(AccessLevel::Authenticated, store.view()),
        RouteDecision::RedirectToLogin
    );
}

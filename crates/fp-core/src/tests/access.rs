use crate::{AccessLevel, Identity, can_access};

use chrono::Utc;

fn identity(is_superuser: bool) -> Identity {
    Identity {
        id: 1,
        email: "u@example.com".to_string(),
        username: "u".to_string(),
        is_superuser,
        powerbi_link: None,
        form_links: [None, None, None],
        logged_in_at: Utc::now(),
    }
}

#[test]
fn test_no_identity_never_passes() {
    assert!(!can_access(None, AccessLevel::Authenticated));
    assert!(!can_access(None, AccessLevel::Admin));
}

#[test]
fn test_regular_user_passes_authenticated_only() {
    let user = identity(false);
    assert!(can_access(Some(&user), AccessLevel::Authenticated));
    assert!(!can_access(Some(&user), AccessLevel::Admin));
}

#[test]
fn test_superuser_passes_both() {
    let admin = identity(true);
    assert!(can_access(Some(&admin), AccessLevel::Authenticated));
    assert!(can_access(Some(&admin), AccessLevel::Admin));
}

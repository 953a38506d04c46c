use crate::Identity;

use chrono::Utc;

fn identity() -> Identity {
    Identity {
        id: 7,
        email: "ana@example.com".to_string(),
        username: "ana".to_string(),
        is_superuser: false,
        powerbi_link: None,
        form_links: [
            Some("https://docs.google.com/spreadsheets/d/abc".to_string()),
            None,
            Some(String::new()),
        ],
        logged_in_at: Utc::now(),
    }
}

#[test]
fn test_form_link_by_slot() {
    let identity = identity();

    assert_eq!(
        identity.form_link(1),
        Some("https://docs.google.com/spreadsheets/d/abc")
    );
    assert_eq!(identity.form_link(2), None);
    // Empty string counts as unassigned.
    assert_eq!(identity.form_link(3), None);
    // Out-of-range slots are simply unassigned, not a panic.
    assert_eq!(identity.form_link(0), None);
    assert_eq!(identity.form_link(4), None);
}

#[test]
fn test_assigned_form_links_keep_slot_numbers() {
    let identity = identity();

    let assigned: Vec<(usize, &str)> = identity.assigned_form_links().collect();
    assert_eq!(
        assigned,
        vec![(1, "https://docs.google.com/spreadsheets/d/abc")]
    );
}

#[test]
fn test_display_name_falls_back_to_email() {
    let mut identity = identity();
    assert_eq!(identity.display_name(), "ana");

    identity.username.clear();
    assert_eq!(identity.display_name(), "ana@example.com");
}

#[test]
fn test_serde_roundtrip() {
    let original = identity();

    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn test_has_dashboard() {
    let mut identity = identity();
    assert!(!identity.has_dashboard());

    identity.powerbi_link = Some(String::new());
    assert!(!identity.has_dashboard());

    identity.powerbi_link = Some("https://app.powerbi.com/view?r=abc".to_string());
    assert!(identity.has_dashboard());
}

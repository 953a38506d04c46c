use crate::{UserProfile, UserRecord};

#[test]
fn test_deserialize_without_profile() {
    let json = r#"{"id": 3, "username": "luis", "email": "luis@example.com"}"#;
    let record: UserRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, 3);
    assert!(!record.is_superuser);
    assert!(record.profile.is_none());
    assert_eq!(record.profile_or_default(), UserProfile::default());
}

#[test]
fn test_deserialize_full_record() {
    let json = r#"{
        "id": 1,
        "username": "admin",
        "email": "admin@example.com",
        "is_superuser": true,
        "profile": {
            "form_link1": "https://docs.google.com/spreadsheets/d/abc",
            "powerbi_link": "https://app.powerbi.com/view?r=x"
        }
    }"#;
    let record: UserRecord = serde_json::from_str(json).unwrap();

    assert!(record.is_superuser);
    let profile = record.profile_or_default();
    assert_eq!(
        profile.form_link1.as_deref(),
        Some("https://docs.google.com/spreadsheets/d/abc")
    );
    assert!(profile.form_link2.is_none());
}

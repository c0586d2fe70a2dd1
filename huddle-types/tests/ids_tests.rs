use huddle_types::{PostId, ProfileId, UserId};
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn new_ids_are_unique() {
    let a = UserId::new();
    let b = UserId::new();
    assert_ne!(a, b);
}

#[test]
fn display_matches_uuid_text() {
    let uuid = Uuid::now_v7();
    let id = PostId::from_uuid(uuid);
    assert_eq!(id.to_string(), uuid.to_string());
}

#[test]
fn from_str_roundtrip() {
    let id = ProfileId::new();
    let parsed = ProfileId::from_str(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn from_str_rejects_garbage() {
    assert!(UserId::from_str("not-a-uuid").is_err());
    assert!(UserId::from_str("").is_err());
}

#[test]
fn serializes_as_bare_uuid_string() {
    let id = UserId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));

    let back: UserId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn v7_ids_are_time_ordered() {
    let earlier = UserId::new();
    let later = UserId::new();
    assert!(earlier.as_uuid() <= later.as_uuid());
}

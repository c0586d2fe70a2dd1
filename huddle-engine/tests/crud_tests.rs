//! Plain CRUD behavior shared by the entity operations: id validation,
//! patch semantics, the post owner non-invariant, member-type reads.

mod common;

use common::{post_draft, seed_user, user_draft};
use huddle_engine::{member_types, posts, users, Database, EngineError, ErrorKind};
use huddle_types::{MemberType, MemberTypeId, PostId, PostPatch, UserId, UserPatch};
use pretty_assertions::assert_eq;

// ── Users ────────────────────────────────────────────────────────

#[test]
fn list_returns_users_in_creation_order() {
    let mut db = Database::new();
    let a = seed_user(&mut db, "a");
    let b = seed_user(&mut db, "b");

    let ids: Vec<UserId> = users::list(&db).into_iter().map(|u| u.id).collect();
    assert_eq!(ids, [a.id, b.id]);
}

#[test]
fn patch_on_valid_but_absent_id_is_not_found() {
    let mut db = Database::new();
    let ghost = UserId::new();

    let err = users::update(&mut db, &ghost.to_string(), UserPatch::default()).unwrap_err();
    assert_eq!(err, EngineError::UserNotFound(ghost));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn patch_on_malformed_id_is_bad_request_and_skips_the_store() {
    let mut db = Database::new();
    seed_user(&mut db, "a");

    let err = users::update(
        &mut db,
        "00000000-zzzz",
        UserPatch {
            email: Some("x@example.com".to_owned()),
            ..UserPatch::default()
        },
    )
    .unwrap_err();
    assert_eq!(err, EngineError::InvalidId("00000000-zzzz".to_owned()));
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    // Nothing was consulted or modified.
    assert_eq!(users::list(&db)[0].email, "a@example.com");
}

#[test]
fn patch_merges_partial_fields() {
    let mut db = Database::new();
    let user = seed_user(&mut db, "a");

    let updated = users::update(
        &mut db,
        &user.id.to_string(),
        UserPatch {
            last_name: Some("Updated".to_owned()),
            ..UserPatch::default()
        },
    )
    .unwrap();
    assert_eq!(updated.last_name, "Updated");
    assert_eq!(updated.first_name, user.first_name);
    assert_eq!(updated.email, user.email);
}

#[test]
fn get_with_malformed_id_is_bad_request() {
    let db = Database::new();
    let err = users::get(&db, "nope").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[test]
fn create_ignores_no_preconditions() {
    let mut db = Database::new();
    // Same draft twice is fine; users are only keyed by id.
    let a = users::create(&mut db, user_draft("dup"));
    let b = users::create(&mut db, user_draft("dup"));
    assert_ne!(a.id, b.id);
    assert_eq!(users::list(&db).len(), 2);
}

// ── Posts ────────────────────────────────────────────────────────

#[test]
fn post_creation_does_not_enforce_the_owner_fk() {
    let mut db = Database::new();
    let ghost = UserId::new();

    // Documented non-invariant: this succeeds.
    let post = posts::create(&mut db, post_draft(ghost, "orphan"));
    assert_eq!(post.user_id, ghost);
    assert_eq!(posts::list(&db).len(), 1);
}

#[test]
fn post_patch_and_delete_validate_existence() {
    let mut db = Database::new();
    let ghost = PostId::new();

    assert_eq!(
        posts::update(&mut db, &ghost.to_string(), PostPatch::default()),
        Err(EngineError::PostNotFound(ghost))
    );
    assert_eq!(
        posts::delete(&mut db, &ghost.to_string()),
        Err(EngineError::PostNotFound(ghost))
    );
}

#[test]
fn post_roundtrip() {
    let mut db = Database::new();
    let author = seed_user(&mut db, "author");
    let post = posts::create(&mut db, post_draft(author.id, "title"));

    let updated = posts::update(
        &mut db,
        &post.id.to_string(),
        PostPatch {
            content: Some("edited".to_owned()),
            title: None,
        },
    )
    .unwrap();
    assert_eq!(updated.title, "title");
    assert_eq!(updated.content, "edited");

    let removed = posts::delete(&mut db, &post.id.to_string()).unwrap();
    assert_eq!(removed.id, post.id);
    assert!(posts::list(&db).is_empty());
}

// ── Member types ─────────────────────────────────────────────────

#[test]
fn member_types_are_seeded_and_readable() {
    let db = Database::new();
    let listed = member_types::list(&db);
    assert_eq!(listed.len(), 2);

    let basic = member_types::get(&db, "basic").unwrap();
    assert_eq!(basic.discount, 0);
    assert_eq!(basic.month_posts_limit, 20);
}

#[test]
fn unknown_member_type_is_not_found() {
    let db = Database::new();
    let err = member_types::get(&db, "platinum").unwrap_err();
    assert_eq!(
        err,
        EngineError::MemberTypeNotFound(MemberTypeId::new("platinum"))
    );
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn custom_member_type_seed_is_honored() {
    let db = Database::with_member_types(vec![MemberType {
        id: MemberTypeId::new("solo"),
        discount: 1,
        month_posts_limit: 5,
    }]);
    assert_eq!(member_types::list(&db).len(), 1);
    assert!(member_types::get(&db, "basic").is_err());
    assert_eq!(member_types::get(&db, "solo").unwrap().discount, 1);
}

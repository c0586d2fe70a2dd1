//! Shared fixtures for engine tests.

#![allow(dead_code)]

use huddle_engine::{users, Database};
use huddle_types::{MemberTypeId, NewPost, NewProfile, NewUser, User, UserId};

pub fn user_draft(name: &str) -> NewUser {
    NewUser {
        first_name: name.to_owned(),
        last_name: "Tester".to_owned(),
        email: format!("{name}@example.com"),
    }
}

pub fn seed_user(db: &mut Database, name: &str) -> User {
    users::create(db, user_draft(name))
}

pub fn profile_draft(user_id: UserId, tier: &str) -> NewProfile {
    NewProfile {
        user_id,
        member_type_id: MemberTypeId::new(tier),
        avatar: "avatar.png".to_owned(),
        sex: "other".to_owned(),
        birthday: 946_684_800_000,
        country: "NL".to_owned(),
        street: "Main".to_owned(),
        city: "Delft".to_owned(),
    }
}

pub fn post_draft(user_id: UserId, title: &str) -> NewPost {
    NewPost {
        user_id,
        title: title.to_owned(),
        content: "content".to_owned(),
    }
}

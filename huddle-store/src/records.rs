//! [`Record`] implementations binding the generic store to the Huddle
//! entity types.

use crate::Record;
use huddle_types::{NewPost, NewProfile, NewUser, Post, PostId, Profile, ProfileId, User, UserId};

impl Record for User {
    type Id = UserId;
    type Draft = NewUser;

    fn fresh_id() -> UserId {
        UserId::new()
    }

    fn build(id: UserId, draft: NewUser) -> Self {
        User {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            subscribed_to_user_ids: Vec::new(),
        }
    }

    fn id(&self) -> UserId {
        self.id
    }
}

impl Record for Profile {
    type Id = ProfileId;
    type Draft = NewProfile;

    fn fresh_id() -> ProfileId {
        ProfileId::new()
    }

    fn build(id: ProfileId, draft: NewProfile) -> Self {
        Profile {
            id,
            user_id: draft.user_id,
            member_type_id: draft.member_type_id,
            avatar: draft.avatar,
            sex: draft.sex,
            birthday: draft.birthday,
            country: draft.country,
            street: draft.street,
            city: draft.city,
        }
    }

    fn id(&self) -> ProfileId {
        self.id
    }
}

impl Record for Post {
    type Id = PostId;
    type Draft = NewPost;

    fn fresh_id() -> PostId {
        PostId::new()
    }

    fn build(id: PostId, draft: NewPost) -> Self {
        Post {
            id,
            user_id: draft.user_id,
            title: draft.title,
            content: draft.content,
        }
    }

    fn id(&self) -> PostId {
        self.id
    }
}

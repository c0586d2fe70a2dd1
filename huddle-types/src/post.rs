use crate::{PostId, UserId};
use serde::{Deserialize, Serialize};

/// A post authored by a user.
///
/// Note: post creation does not verify the owner exists. A dangling
/// `user_id` is tolerated until the owning user's delete cascade (which
/// removes the user's posts) or forever if the owner never existed. This
/// mirrors the service's documented non-invariant for posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

/// Fields required to create a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

/// Partial update for a post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    /// Applies a patch field by field.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

//! Post operations.
//!
//! Creation deliberately performs no owner-existence check: the post→user
//! reference is repaired only by the user-delete cascade. This keeps posting
//! a plain store append, matching the service's documented non-invariant.

use crate::{parse_id, Database, EngineError, EngineResult};
use huddle_types::{NewPost, Post, PostId, PostPatch};
use tracing::debug;

/// All posts, in creation order.
#[must_use]
pub fn list(db: &Database) -> Vec<Post> {
    db.posts.find_many()
}

/// Looks up a post by id.
pub fn get(db: &Database, id: &str) -> EngineResult<Post> {
    let id: PostId = parse_id(id)?;
    db.posts.get(id).ok_or(EngineError::PostNotFound(id))
}

/// Creates a post. The owner is not verified to exist.
pub fn create(db: &mut Database, draft: NewPost) -> Post {
    let post = db.posts.create(draft);
    debug!(post_id = %post.id, user_id = %post.user_id, "post created");
    post
}

/// Applies a partial update to a post.
pub fn update(db: &mut Database, id: &str, patch: PostPatch) -> EngineResult<Post> {
    let id: PostId = parse_id(id)?;
    db.posts
        .change(id, |post| post.apply(patch))
        .map_err(|_| EngineError::PostNotFound(id))
}

/// Deletes a post by id.
pub fn delete(db: &mut Database, id: &str) -> EngineResult<Post> {
    let id: PostId = parse_id(id)?;
    db.posts
        .delete(id)
        .map_err(|_| EngineError::PostNotFound(id))
}

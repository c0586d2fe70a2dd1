//! User operations, including the two pieces with real cross-entity rules:
//! subscription edge management and the user-delete cascade.

use crate::{parse_id, Database, EngineError, EngineResult};
use huddle_types::{NewUser, User, UserId, UserPatch};
use tracing::debug;

/// All users, in creation order.
#[must_use]
pub fn list(db: &Database) -> Vec<User> {
    db.users.find_many()
}

/// Looks up a user by id.
pub fn get(db: &Database, id: &str) -> EngineResult<User> {
    let id: UserId = parse_id(id)?;
    db.users.get(id).ok_or(EngineError::UserNotFound(id))
}

/// Creates a user with an empty subscription list.
pub fn create(db: &mut Database, draft: NewUser) -> User {
    let user = db.users.create(draft);
    debug!(user_id = %user.id, "user created");
    user
}

/// Applies a partial update to a user.
pub fn update(db: &mut Database, id: &str, patch: UserPatch) -> EngineResult<User> {
    let id: UserId = parse_id(id)?;
    db.users
        .change(id, |user| user.apply(patch))
        .map_err(|_| EngineError::UserNotFound(id))
}

/// Deletes a user and everything that references it.
///
/// Cascade order: strip the id from every other user's subscription list,
/// delete the user's posts, delete the user's profile, delete the user.
/// All preconditions are checked before the first write and the whole
/// cascade runs under one `&mut Database`, so no caller can observe a
/// half-applied state. Returns the pre-deletion snapshot.
pub fn delete(db: &mut Database, id: &str) -> EngineResult<User> {
    let id: UserId = parse_id(id)?;
    let snapshot = db.users.get(id).ok_or(EngineError::UserNotFound(id))?;

    let subscribers = db.users.find_where(|user| user.is_subscribed_to(id));
    for subscriber in &subscribers {
        db.users
            .change(subscriber.id, |user| {
                user.subscribed_to_user_ids.retain(|sid| *sid != id);
            })
            .map_err(|_| EngineError::UserNotFound(subscriber.id))?;
    }

    let posts = db.posts.find_where(|post| post.user_id == id);
    for post in &posts {
        db.posts
            .delete(post.id)
            .map_err(|_| EngineError::PostNotFound(post.id))?;
    }

    // At most one profile per user, but sweep the full list anyway so a
    // cascade also repairs a store that somehow holds duplicates.
    let profiles = db.profiles.find_where(|profile| profile.user_id == id);
    for profile in &profiles {
        db.profiles
            .delete(profile.id)
            .map_err(|_| EngineError::ProfileNotFound(profile.id))?;
    }

    db.users
        .delete(id)
        .map_err(|_| EngineError::UserNotFound(id))?;

    debug!(
        user_id = %id,
        subscribers = subscribers.len(),
        posts = posts.len(),
        profiles = profiles.len(),
        "user delete cascade complete"
    );
    Ok(snapshot)
}

/// Adds a subscription edge: `subscriber_id` subscribes to `target_id`.
///
/// Returns the updated subscriber. (The HTTP route carries the target in
/// the path and the subscriber in the body.)
pub fn subscribe(db: &mut Database, target_id: &str, subscriber_id: &str) -> EngineResult<User> {
    let target: UserId = parse_id(target_id)?;
    let subscriber_id: UserId = parse_id(subscriber_id)?;

    if db.users.get(target).is_none() {
        return Err(EngineError::UserNotFound(target));
    }
    let subscriber = db
        .users
        .get(subscriber_id)
        .ok_or(EngineError::UserNotFound(subscriber_id))?;

    if subscriber_id == target {
        return Err(EngineError::SelfSubscription(subscriber_id));
    }
    if subscriber.is_subscribed_to(target) {
        return Err(EngineError::AlreadySubscribed(subscriber_id, target));
    }

    let updated = db
        .users
        .change(subscriber_id, |user| {
            user.subscribed_to_user_ids.push(target);
        })
        .map_err(|_| EngineError::UserNotFound(subscriber_id))?;
    debug!(subscriber = %subscriber_id, target = %target, "subscription added");
    Ok(updated)
}

/// Removes a subscription edge: `subscriber_id` unsubscribes from
/// `target_id`. Returns the updated subscriber.
pub fn unsubscribe(db: &mut Database, target_id: &str, subscriber_id: &str) -> EngineResult<User> {
    let target: UserId = parse_id(target_id)?;
    let subscriber_id: UserId = parse_id(subscriber_id)?;

    if db.users.get(target).is_none() {
        return Err(EngineError::UserNotFound(target));
    }
    let subscriber = db
        .users
        .get(subscriber_id)
        .ok_or(EngineError::UserNotFound(subscriber_id))?;

    if !subscriber.is_subscribed_to(target) {
        return Err(EngineError::NotSubscribed(subscriber_id, target));
    }

    let updated = db
        .users
        .change(subscriber_id, |user| {
            user.subscribed_to_user_ids.retain(|sid| *sid != target);
        })
        .map_err(|_| EngineError::UserNotFound(subscriber_id))?;
    debug!(subscriber = %subscriber_id, target = %target, "subscription removed");
    Ok(updated)
}

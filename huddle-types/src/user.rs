use crate::UserId;
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// `subscribed_to_user_ids` is semantically a set of directed subscription
/// edges (this user → target). The engine guarantees it never contains
/// duplicates, the user's own id, or the id of a deleted user; the `Vec`
/// representation only preserves subscription order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subscribed_to_user_ids: Vec<UserId>,
}

impl User {
    /// True if this user holds a subscription edge to `target`.
    #[must_use]
    pub fn is_subscribed_to(&self, target: UserId) -> bool {
        self.subscribed_to_user_ids.contains(&target)
    }
}

/// Fields required to create a user. Subscriptions always start empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Partial update for a user. Absent fields are left untouched.
///
/// Subscription edges are deliberately not patchable here; they change only
/// through the subscribe/unsubscribe operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Applies a patch field by field.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

//! Profile operations. Creation is the rule-heavy path: the owning user and
//! the member type must both exist, and a user can hold only one profile.

use crate::{parse_id, Database, EngineError, EngineResult};
use huddle_types::{NewProfile, Profile, ProfileId, ProfilePatch};
use tracing::debug;

/// All profiles, in creation order.
#[must_use]
pub fn list(db: &Database) -> Vec<Profile> {
    db.profiles.find_many()
}

/// Looks up a profile by id.
pub fn get(db: &Database, id: &str) -> EngineResult<Profile> {
    let id: ProfileId = parse_id(id)?;
    db.profiles.get(id).ok_or(EngineError::ProfileNotFound(id))
}

/// Creates a profile after verifying all relationship invariants.
pub fn create(db: &mut Database, draft: NewProfile) -> EngineResult<Profile> {
    if db.users.get(draft.user_id).is_none() {
        return Err(EngineError::OwnerMissing(draft.user_id));
    }
    if db.member_type(&draft.member_type_id).is_none() {
        return Err(EngineError::UnknownMemberType(draft.member_type_id));
    }
    if db
        .profiles
        .find_one(|profile| profile.user_id == draft.user_id)
        .is_some()
    {
        return Err(EngineError::ProfileExists(draft.user_id));
    }

    let profile = db.profiles.create(draft);
    debug!(profile_id = %profile.id, user_id = %profile.user_id, "profile created");
    Ok(profile)
}

/// Applies a partial update to a profile.
pub fn update(db: &mut Database, id: &str, patch: ProfilePatch) -> EngineResult<Profile> {
    let id: ProfileId = parse_id(id)?;
    db.profiles
        .change(id, |profile| profile.apply(patch))
        .map_err(|_| EngineError::ProfileNotFound(id))
}

/// Deletes a profile by id.
pub fn delete(db: &mut Database, id: &str) -> EngineResult<Profile> {
    let id: ProfileId = parse_id(id)?;
    db.profiles
        .delete(id)
        .map_err(|_| EngineError::ProfileNotFound(id))
}

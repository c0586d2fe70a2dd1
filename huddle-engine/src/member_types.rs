//! Read-only access to the seeded membership tiers.

use crate::{Database, EngineError, EngineResult};
use huddle_types::{MemberType, MemberTypeId};

/// All member types, in seed order.
#[must_use]
pub fn list(db: &Database) -> Vec<MemberType> {
    db.member_types().to_vec()
}

/// Looks up a member type by its string id.
pub fn get(db: &Database, id: &str) -> EngineResult<MemberType> {
    let id = MemberTypeId::new(id);
    db.member_type(&id)
        .cloned()
        .ok_or(EngineError::MemberTypeNotFound(id))
}

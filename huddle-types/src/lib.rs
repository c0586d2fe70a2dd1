//! Core type definitions for Huddle.
//!
//! This crate defines the entity records the rest of the service operates on:
//! - Per-entity identifiers (UUID v7 newtypes)
//! - The three entity records: [`User`], [`Profile`], [`Post`]
//! - Typed create-drafts (`New*`) and partial-update patches (`*Patch`)
//! - [`MemberType`] — the externally seeded membership tiers profiles
//!   reference
//!
//! Everything here is plain data. Relationship rules (cascades, subscription
//! symmetry, profile uniqueness) live in `huddle-engine`.

mod ids;
mod member_type;
mod post;
mod profile;
mod user;

pub use ids::{PostId, ProfileId, UserId};
pub use member_type::{MemberType, MemberTypeId};
pub use post::{NewPost, Post, PostPatch};
pub use profile::{NewProfile, Profile, ProfilePatch};
pub use user::{NewUser, User, UserPatch};

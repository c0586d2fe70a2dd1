//! Relationship rules engine for Huddle.
//!
//! Composes `huddle-store` calls into operations that keep the entity graph
//! consistent:
//! - profile-per-user uniqueness and member-type validation on profile
//!   creation
//! - subscription edge bookkeeping (no duplicates, no self-edges, both
//!   endpoints alive)
//! - the user-delete cascade (strip subscription edges, delete posts and
//!   profile, then the user)
//!
//! Every operation validates identifier format through one shared predicate
//! before touching a store, and checks all preconditions before its first
//! write. Operations take `&mut Database` and run to completion without
//! yielding, so a cascade is atomic with respect to any other operation.

mod db;
mod error;
pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod users;

pub use db::Database;
pub use error::{EngineError, EngineResult, ErrorKind};

use std::str::FromStr;

/// Parses a raw identifier, rejecting anything that is not canonical UUID
/// text before any store lookup is attempted.
fn parse_id<I>(raw: &str) -> EngineResult<I>
where
    I: FromStr<Err = uuid::Error>,
{
    raw.parse()
        .map_err(|_| EngineError::InvalidId(raw.to_owned()))
}

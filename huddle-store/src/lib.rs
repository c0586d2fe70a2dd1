//! In-memory entity storage for Huddle.
//!
//! One [`EntityStore`] holds all records of a single entity kind, keyed by a
//! typed id and ordered by insertion. The store knows nothing about
//! relationships between entity kinds — cascade and integrity rules live in
//! `huddle-engine`, which composes store calls.
//!
//! Stores are purely in-memory: no I/O, no persistence, deterministic given
//! the same operation sequence and id generator.

mod error;
mod records;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::{EntityStore, Record};

//! Error taxonomy for engine operations.
//!
//! Every failure is either a [`NotFound`](ErrorKind::NotFound) (a referenced
//! entity does not exist) or a [`BadRequest`](ErrorKind::BadRequest) (a
//! malformed identifier or a relationship invariant would be violated).
//! Errors are raised at the first failing precondition and abort the
//! operation before any write.

use huddle_types::{MemberTypeId, PostId, ProfileId, UserId};
use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Coarse error category, used by transport layers for status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
}

/// Errors produced by engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("malformed id: {0:?}")]
    InvalidId(String),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("profile not found: {0}")]
    ProfileNotFound(ProfileId),

    #[error("post not found: {0}")]
    PostNotFound(PostId),

    #[error("member type not found: {0}")]
    MemberTypeNotFound(MemberTypeId),

    #[error("no user {0} to own the profile")]
    OwnerMissing(UserId),

    #[error("user {0} already has a profile")]
    ProfileExists(UserId),

    #[error("unknown member type: {0}")]
    UnknownMemberType(MemberTypeId),

    #[error("user {0} is already subscribed to {1}")]
    AlreadySubscribed(UserId, UserId),

    #[error("user {0} is not subscribed to {1}")]
    NotSubscribed(UserId, UserId),

    #[error("user {0} cannot subscribe to themselves")]
    SelfSubscription(UserId),
}

impl EngineError {
    /// The coarse category this error maps to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::UserNotFound(_)
            | EngineError::ProfileNotFound(_)
            | EngineError::PostNotFound(_)
            | EngineError::MemberTypeNotFound(_) => ErrorKind::NotFound,
            EngineError::InvalidId(_)
            | EngineError::OwnerMissing(_)
            | EngineError::ProfileExists(_)
            | EngineError::UnknownMemberType(_)
            | EngineError::AlreadySubscribed(_, _)
            | EngineError::NotSubscribed(_, _)
            | EngineError::SelfSubscription(_) => ErrorKind::BadRequest,
        }
    }
}

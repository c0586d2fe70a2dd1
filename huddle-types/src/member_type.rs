use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a membership tier (e.g. `"basic"`, `"business"`).
///
/// Tiers are seeded externally and referenced by name, so this is a string
/// newtype rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberTypeId(String);

impl MemberTypeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MemberTypeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for MemberTypeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A membership tier a profile can reference.
///
/// The tier list is fixed at startup and read-only through the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: u32,
    pub month_posts_limit: u32,
}

impl MemberType {
    /// The default seed: the `basic` and `business` tiers.
    #[must_use]
    pub fn defaults() -> Vec<MemberType> {
        vec![
            MemberType {
                id: MemberTypeId::new("basic"),
                discount: 0,
                month_posts_limit: 20,
            },
            MemberType {
                id: MemberTypeId::new("business"),
                discount: 5,
                month_posts_limit: 100,
            },
        ]
    }
}

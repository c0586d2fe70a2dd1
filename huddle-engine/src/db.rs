use huddle_store::EntityStore;
use huddle_types::{MemberType, MemberTypeId, Post, Profile, User};

/// The whole in-memory dataset: one store per entity kind plus the seeded
/// member-type list.
///
/// The database exclusively owns all records; operation modules read and
/// write through it and hold no copies of their own. Member types are fixed
/// at construction and never mutated.
#[derive(Debug, Clone)]
pub struct Database {
    pub users: EntityStore<User>,
    pub profiles: EntityStore<Profile>,
    pub posts: EntityStore<Post>,
    member_types: Vec<MemberType>,
}

impl Database {
    /// Creates an empty database seeded with the default member types.
    #[must_use]
    pub fn new() -> Self {
        Self::with_member_types(MemberType::defaults())
    }

    /// Creates an empty database with an explicit member-type seed.
    #[must_use]
    pub fn with_member_types(member_types: Vec<MemberType>) -> Self {
        Self {
            users: EntityStore::new(),
            profiles: EntityStore::new(),
            posts: EntityStore::new(),
            member_types,
        }
    }

    /// The seeded member types, in seed order.
    #[must_use]
    pub fn member_types(&self) -> &[MemberType] {
        &self.member_types
    }

    /// Looks up a member type by id.
    #[must_use]
    pub fn member_type(&self, id: &MemberTypeId) -> Option<&MemberType> {
        self.member_types.iter().find(|mt| mt.id == *id)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

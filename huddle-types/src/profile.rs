use crate::{MemberTypeId, ProfileId, UserId};
use serde::{Deserialize, Serialize};

/// A user's profile. Each user owns at most one.
///
/// `member_type_id` must name one of the seeded membership tiers; the engine
/// validates this at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub member_type_id: MemberTypeId,
    pub avatar: String,
    pub sex: String,
    /// Epoch milliseconds.
    pub birthday: i64,
    pub country: String,
    pub street: String,
    pub city: String,
}

/// Fields required to create a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub user_id: UserId,
    pub member_type_id: MemberTypeId,
    pub avatar: String,
    pub sex: String,
    pub birthday: i64,
    pub country: String,
    pub street: String,
    pub city: String,
}

/// Partial update for a profile. Absent fields are left untouched.
///
/// The owning user is not patchable; a profile stays with the user it was
/// created for until the user-delete cascade removes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub member_type_id: Option<MemberTypeId>,
    pub avatar: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<i64>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
}

impl Profile {
    /// Applies a patch field by field.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(member_type_id) = patch.member_type_id {
            self.member_type_id = member_type_id;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(sex) = patch.sex {
            self.sex = sex;
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(street) = patch.street {
            self.street = street;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
    }
}

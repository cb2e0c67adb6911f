use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// `profiles` row. `id` is the owner's identity id.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub email: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Full replacement written by a profile save.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpsert {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub email: Option<String>,
    pub updated_at: OffsetDateTime,
}

impl From<ProfileUpsert> for Profile {
    fn from(p: ProfileUpsert) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name,
            skills: p.skills,
            interests: p.interests,
            email: p.email,
            updated_at: p.updated_at,
        }
    }
}

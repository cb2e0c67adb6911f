use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::profiles::repo_types::{Profile, ProfileUpsert};

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Profile>, StoreError> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, full_name, skills, interests, email, updated_at
          FROM profiles
         WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(profile)
}

/// Insert the profile, or overwrite every column if `id` exists. Last write wins.
pub async fn upsert(db: &PgPool, p: &ProfileUpsert) -> Result<Profile, StoreError> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (id, full_name, skills, interests, email, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO UPDATE
           SET full_name  = EXCLUDED.full_name,
               skills     = EXCLUDED.skills,
               interests  = EXCLUDED.interests,
               email      = EXCLUDED.email,
               updated_at = EXCLUDED.updated_at
        RETURNING id, full_name, skills, interests, email, updated_at
        "#,
    )
    .bind(p.id)
    .bind(&p.full_name)
    .bind(&p.skills)
    .bind(&p.interests)
    .bind(&p.email)
    .bind(p.updated_at)
    .fetch_one(db)
    .await?;
    Ok(profile)
}

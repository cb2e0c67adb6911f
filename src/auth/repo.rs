use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::AuthUser;

impl AuthUser {
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>(
            r#"
            SELECT id, email, password_hash, email_confirmed_at
              FROM auth_users
             WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create an account. Returns `None` when the email is already taken.
    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        confirmation_token: Option<&str>,
    ) -> anyhow::Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>(
            r#"
            INSERT INTO auth_users (email, password_hash, confirmation_token, email_confirmed_at)
            VALUES ($1, $2, $3, CASE WHEN $3::text IS NULL THEN now() END)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, password_hash, email_confirmed_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(confirmation_token)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Mark the account owning `token` as confirmed and burn the token.
    pub async fn confirm(db: &PgPool, token: &str) -> anyhow::Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>(
            r#"
            UPDATE auth_users
               SET email_confirmed_at = now(), confirmation_token = NULL
             WHERE confirmation_token = $1
            RETURNING id, email, password_hash, email_confirmed_at
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}

pub async fn insert_session(
    db: &PgPool,
    session_id: Uuid,
    user_id: Uuid,
    expires_at: OffsetDateTime,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO auth_sessions (id, user_id, expires_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(session_id)
    .bind(user_id)
    .bind(expires_at)
    .execute(db)
    .await?;
    Ok(())
}

/// Owner of a live session, if the session exists and has not expired.
pub async fn find_session_user(
    db: &PgPool,
    session_id: Uuid,
) -> anyhow::Result<Option<(Uuid, String)>> {
    let row = sqlx::query_as::<_, (Uuid, String)>(
        r#"
        SELECT u.id, u.email
          FROM auth_sessions s
          JOIN auth_users u ON u.id = s.user_id
         WHERE s.id = $1 AND s.expires_at > now()
        "#,
    )
    .bind(session_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn delete_session(db: &PgPool, session_id: Uuid) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM auth_sessions WHERE id = $1")
        .bind(session_id)
        .execute(db)
        .await?;
    Ok(())
}

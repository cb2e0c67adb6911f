use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Account record in `auth_users`.
#[derive(Debug, Clone, FromRow)]
pub struct AuthUser {
    pub id: Uuid,                                 // unique user ID
    pub email: String,                            // normalized email
    pub password_hash: String,                    // Argon2 PHC string
    pub email_confirmed_at: Option<OffsetDateTime>,
}

impl AuthUser {
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }
}

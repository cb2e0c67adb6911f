use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{
    credentials::{
        check_password_strength, confirmation_token, hash_password, normalize_email,
        verify_password,
    },
    gateway::{AuthError, Identity, IdentityGateway, Session},
    jwt::SessionKeys,
    repo,
    repo_types::AuthUser,
};
use crate::config::AppConfig;

/// Identity provider backed by the `auth_users`/`auth_sessions` tables.
#[derive(Clone)]
pub struct PgIdentity {
    db: PgPool,
    keys: SessionKeys,
    autoconfirm: bool,
}

impl PgIdentity {
    pub fn new(db: PgPool, config: &AppConfig) -> Self {
        Self {
            db,
            keys: SessionKeys::from(&config.jwt),
            autoconfirm: config.auth_autoconfirm,
        }
    }
}

#[async_trait]
impl IdentityGateway for PgIdentity {
    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email)?;
        let user = AuthUser::find_by_email(&self.db, &email)
            .await
            .context("find_by_email")?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }
        if !user.is_confirmed() {
            return Err(AuthError::EmailNotConfirmed);
        }

        let session_id = Uuid::new_v4();
        let (token, expires_at) = self.keys.sign(user.id, session_id, &user.email)?;
        repo::insert_session(&self.db, session_id, user.id, expires_at)
            .await
            .context("insert session")?;

        info!(user_id = %user.id, "user signed in");
        Ok(Session {
            token,
            identity: Identity {
                id: user.id,
                email: user.email,
            },
            expires_in_secs: self.keys.ttl.as_secs() as i64,
        })
    }

    #[instrument(skip(self, password))]
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<(), AuthError> {
        let email = normalize_email(email)?;
        check_password_strength(password)?;

        let hash = hash_password(password)?;
        let token = (!self.autoconfirm).then(confirmation_token);
        let user = AuthUser::create(&self.db, &email, &hash, token.as_deref())
            .await
            .context("create user")?
            .ok_or(AuthError::EmailTaken)?;

        match token {
            // No mailer: the link goes to the operator log.
            Some(token) => info!(
                user_id = %user.id,
                confirmation_link = %format!("{}?token={}", redirect_to, token),
                "user registered, confirmation pending"
            ),
            None => info!(user_id = %user.id, "user registered and auto-confirmed"),
        }
        Ok(())
    }

    async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        let Ok(claims) = self.keys.verify(token) else {
            debug!("sign_out with unverifiable token ignored");
            return Ok(());
        };
        repo::delete_session(&self.db, claims.sid)
            .await
            .context("delete session")?;
        info!(user_id = %claims.sub, "user signed out");
        Ok(())
    }

    async fn current_user(&self, token: Option<&str>) -> Option<Identity> {
        let claims = match self.keys.verify(token?) {
            Ok(c) => c,
            Err(e) => {
                debug!(error = %e, "session token rejected");
                return None;
            }
        };

        match repo::find_session_user(&self.db, claims.sid).await {
            Ok(Some((id, email))) if id == claims.sub => Some(Identity { id, email }),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, session_id = %claims.sid, "session lookup failed");
                None
            }
        }
    }

    async fn confirm_email(&self, confirmation_token: &str) -> Result<Identity, AuthError> {
        let user = AuthUser::confirm(&self.db, confirmation_token)
            .await
            .context("confirm email")?
            .ok_or(AuthError::InvalidConfirmation)?;
        info!(user_id = %user.id, "email confirmed");
        Ok(Identity {
            id: user.id,
            email: user.email,
        })
    }
}

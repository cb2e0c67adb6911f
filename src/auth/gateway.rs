use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token the caller presents on later requests.
    pub token: String,
    pub identity: Identity,
    pub expires_in_secs: i64,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least {0} characters")]
    WeakPassword(usize),

    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error("email already registered")]
    EmailTaken,

    #[error("email not confirmed")]
    EmailNotConfirmed,

    #[error("confirmation link is invalid or already used")]
    InvalidConfirmation,

    #[error("identity backend failure: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Authentication capability consumed by the handlers.
///
/// Callers pass the session token explicitly; nothing here reads ambient
/// request state.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account. A confirmation link built from `redirect_to`
    /// is issued unless the provider auto-confirms.
    async fn sign_up(&self, email: &str, password: &str, redirect_to: &str)
        -> Result<(), AuthError>;

    /// End the session behind `token`. Unknown tokens are ignored.
    async fn sign_out(&self, token: &str) -> Result<(), AuthError>;

    /// The user behind `token`, if the session is still valid.
    async fn current_user(&self, token: Option<&str>) -> Option<Identity>;

    async fn confirm_email(&self, confirmation_token: &str) -> Result<Identity, AuthError>;
}

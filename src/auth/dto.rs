use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::gateway::Identity;

/// Body of `POST /login` and `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmParams {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginPageResponse {
    pub message: Option<String>,
}

/// Public part of the signed-in user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}

impl From<Identity> for PublicUser {
    fn from(i: Identity) -> Self {
        Self {
            id: i.id,
            email: i.email,
        }
    }
}

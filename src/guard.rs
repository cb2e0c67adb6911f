//! Access checks for guarded pages and the actions behind them.
//!
//! Handlers run the check once when rendering a page and again inside the
//! mutating action: the session may have ended in between.

use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use crate::auth::{
    gateway::{Identity, IdentityGateway},
    session::SessionToken,
};

pub const SIGN_IN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(Identity),
    Denied,
}

/// Ask `gateway` who is behind `session`.
pub async fn check(gateway: &dyn IdentityGateway, session: &SessionToken) -> Access {
    match gateway.current_user(session.as_deref()).await {
        Some(identity) => Access::Granted(identity),
        None => {
            debug!(has_token = session.0.is_some(), "access denied");
            Access::Denied
        }
    }
}

/// Where denied callers go. The requested action is not replayed after sign-in.
pub fn sign_in_redirect() -> Response {
    Redirect::to(SIGN_IN_PATH).into_response()
}

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{ConfirmParams, CredentialsForm, LoginPageResponse, LoginParams},
    session::{cleared_cookie, session_cookie, SessionToken},
};
use crate::state::AppState;

pub const SIGN_IN_FAILED: &str = "Could not authenticate user";
pub const SIGN_UP_FAILED: &str = "Could not create user";
pub const CHECK_EMAIL: &str = "Check email to confirm signup";
pub const EMAIL_CONFIRMED: &str = "Email confirmed, please sign in";
pub const CONFIRMATION_FAILED: &str = "Could not confirm email";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(sign_in))
        .route("/signup", post(sign_up))
        .route("/logout", post(sign_out))
        .route("/auth/callback", get(confirm))
}

/// `/login?message=…`. Messages are fixed ASCII phrases, so only spaces need encoding.
fn login_with_message(message: &str) -> Response {
    Redirect::to(&format!("/login?message={}", message.replace(' ', "+"))).into_response()
}

pub async fn login_page(Query(params): Query<LoginParams>) -> Json<LoginPageResponse> {
    Json(LoginPageResponse {
        message: params.message,
    })
}

#[instrument(skip(state, form))]
pub async fn sign_in(State(state): State<AppState>, Form(form): Form<CredentialsForm>) -> Response {
    match state.identity.sign_in(&form.email, &form.password).await {
        Ok(session) => {
            info!(user_id = %session.identity.id, "session started");
            let cookie = session_cookie(
                &session.token,
                session.expires_in_secs,
                state.config.secure_cookies(),
            );
            ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        Err(e) => {
            warn!(error = %e, "sign in failed");
            login_with_message(SIGN_IN_FAILED)
        }
    }
}

#[instrument(skip(state, form))]
pub async fn sign_up(State(state): State<AppState>, Form(form): Form<CredentialsForm>) -> Response {
    let redirect_to = state.config.confirmation_target();
    match state
        .identity
        .sign_up(&form.email, &form.password, &redirect_to)
        .await
    {
        Ok(()) => login_with_message(CHECK_EMAIL),
        Err(e) => {
            warn!(error = %e, "sign up failed");
            login_with_message(SIGN_UP_FAILED)
        }
    }
}

#[instrument(skip(state, session))]
pub async fn sign_out(State(state): State<AppState>, session: SessionToken) -> Response {
    if let Some(token) = session.as_deref() {
        if let Err(e) = state.identity.sign_out(token).await {
            warn!(error = %e, "sign out failed");
        }
    }
    (
        [(header::SET_COOKIE, cleared_cookie(state.config.secure_cookies()))],
        Redirect::to("/login"),
    )
        .into_response()
}

#[instrument(skip(state, params))]
pub async fn confirm(State(state): State<AppState>, Query(params): Query<ConfirmParams>) -> Response {
    match state.identity.confirm_email(&params.token).await {
        Ok(identity) => {
            info!(user_id = %identity.id, "confirmation link used");
            login_with_message(EMAIL_CONFIRMED)
        }
        Err(e) => {
            warn!(error = %e, "email confirmation failed");
            login_with_message(CONFIRMATION_FAILED)
        }
    }
}

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use time::OffsetDateTime;
use tracing::{error, instrument};

use super::{
    dto::{ProfileForm, ProfileFormDefaults, ProfileResponse},
    services::{build_upsert, load_profile, save_profile},
};
use crate::{
    auth::session::SessionToken,
    error::AppError,
    guard::{self, Access},
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).post(update_profile))
}

#[instrument(skip(state, session))]
pub async fn get_profile(State(state): State<AppState>, session: SessionToken) -> Response {
    let Access::Granted(identity) = guard::check(state.identity.as_ref(), &session).await else {
        return guard::sign_in_redirect();
    };

    let profile = load_profile(state.store.as_ref(), &identity).await;
    Json(ProfileResponse {
        form: ProfileFormDefaults::from(profile.as_ref()),
        email: identity.email,
        profile,
    })
    .into_response()
}

#[instrument(skip(state, session, form))]
pub async fn update_profile(
    State(state): State<AppState>,
    session: SessionToken,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let Access::Granted(identity) = guard::check(state.identity.as_ref(), &session).await else {
        return Ok(guard::sign_in_redirect());
    };

    let upsert = build_upsert(
        &identity,
        &form.full_name,
        &form.skills,
        &form.interests,
        OffsetDateTime::now_utc(),
    );
    match save_profile(state.store.as_ref(), upsert).await {
        Ok(_) => Ok(Redirect::to("/profile").into_response()),
        Err(e) => {
            error!(error = %e, user_id = %identity.id, "profile upsert failed");
            Err(AppError::WriteFailed)
        }
    }
}

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use tracing::{debug, error, info, instrument};

use super::{
    dto::{CreateOpportunityForm, EmptyState, FeedParams, FeedResponse, PostFormResponse},
    repo_types::{OpportunityKind, SearchTerm},
    services::{create_opportunity, feed_query},
};
use crate::{
    auth::session::SessionToken,
    error::AppError,
    guard::{self, Access},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/", get(list_feed))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/post", get(post_form).post(create_post))
}

/// GET /?q=… (`query` is accepted as an older name for `q`)
#[instrument(skip(state, session))]
pub async fn list_feed(
    State(state): State<AppState>,
    session: SessionToken,
    Query(params): Query<FeedParams>,
) -> Json<FeedResponse> {
    let user = state.identity.current_user(session.as_deref()).await;
    let term = SearchTerm::parse(params.term());

    let feed = feed_query(state.store.as_ref(), term.as_ref()).await;
    debug!(count = feed.items.len(), degraded = feed.is_degraded(), "feed rendered");
    let empty_state = feed
        .items
        .is_empty()
        .then(|| EmptyState::new(term.is_some()));

    Json(FeedResponse {
        user: user.map(Into::into),
        showing_results_for: term.map(|t| t.as_str().to_string()),
        opportunities: feed.items,
        empty_state,
    })
}

/// GET /post
#[instrument(skip(state, session))]
pub async fn post_form(State(state): State<AppState>, session: SessionToken) -> Response {
    let Access::Granted(identity) = guard::check(state.identity.as_ref(), &session).await else {
        return guard::sign_in_redirect();
    };
    Json(PostFormResponse {
        user: identity.into(),
        types: OpportunityKind::ALL,
    })
    .into_response()
}

/// POST /post
#[instrument(skip(state, session, form))]
pub async fn create_post(
    State(state): State<AppState>,
    session: SessionToken,
    Form(form): Form<CreateOpportunityForm>,
) -> Result<Response, AppError> {
    // Checked again here: the session may have ended since the form was served.
    let Access::Granted(identity) = guard::check(state.identity.as_ref(), &session).await else {
        return Ok(guard::sign_in_redirect());
    };

    match create_opportunity(state.store.as_ref(), form.into()).await {
        Ok(created) => {
            info!(id = %created.id, user_id = %identity.id, kind = created.kind.as_str(), "opportunity posted");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            error!(error = %e, user_id = %identity.id, "insert opportunity failed");
            Err(AppError::WriteFailed)
        }
    }
}

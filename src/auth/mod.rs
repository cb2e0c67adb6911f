use crate::state::AppState;
use axum::Router;

mod credentials;
pub mod dto;
pub mod gateway;
pub mod handlers;
mod jwt;
pub mod provider;
mod repo;
mod repo_types;
pub mod session;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}

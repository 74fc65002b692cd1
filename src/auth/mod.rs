use axum::{routing::post, Router};

use crate::state::AppState;

mod dto;
pub mod errors;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;
pub(crate) mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/signup",
            post(handlers::signup).fallback(handlers::invalid_method),
        )
        .route(
            "/login",
            post(handlers::login).fallback(handlers::invalid_method),
        )
}

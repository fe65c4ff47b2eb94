pub mod health;
pub mod rounds;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rounds", post(rounds::create_round))
        .route("/rounds/{id}", get(rounds::get_round))
        .route("/rounds/{id}/reset", post(rounds::reset_round))
        .route("/rounds/{id}/words", post(rounds::submit_word))
}

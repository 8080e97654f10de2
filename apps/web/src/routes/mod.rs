pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/match", post(ui::submit_handler))
        .route("/health", get(health::health_handler))
        .with_state(state)
}

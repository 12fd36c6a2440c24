use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/spending-summary", get(handlers::spending_summary))
        .route("/generate-summary", post(handlers::generate_summary))
}

mod handlers;
mod models;

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::AppState;

pub use handlers::{best, not_found};
pub use models::{BestRequest, ErrorResponse, MessageResponse, INVALID_BODY, NO_RESULTS};

/// JSON routes, mounted under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/best", post(best))
}

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::optimizer::find_best;
use crate::AppState;

use super::models::{BestRequest, ErrorResponse, MessageResponse, INVALID_BODY, NO_RESULTS};

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub async fn best(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BestRequest>, JsonRejection>,
) -> Response {
    let Some((from, to)) = payload.ok().and_then(|Json(req)| req.normalized()) else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_BODY);
    };

    match find_best(state.provider.as_ref(), &from, &to, Utc::now(), &state.currency).await {
        Ok(Some(result)) => {
            info!(
                from = %from,
                best = %result.best.airport,
                price_per_km = result.best.price_per_km,
                "best destination found"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Ok(None) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: NO_RESULTS.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            warn!(from = %from, error = %err, "best destination lookup failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

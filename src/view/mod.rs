//! Server-rendered form page. Submissions are validated locally and, when
//! valid, forwarded to `POST /api/best` through a [`BestApi`].

mod client;
mod form;
mod render;
mod state;

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Form, Router};

use crate::AppState;

pub use client::{classify, BestApi, HttpBestApi, Outcome, GENERIC_ERROR};
pub use form::{parse_destinations, FormInput, SubmitRequest, MISSING_FROM, MISSING_TO};
pub use render::{comparison_rows, escape_html, render_page, ComparisonRow, DISABLE_ON_SUBMIT};
pub use state::{ViewResult, ViewState};

pub async fn index() -> Html<String> {
    Html(render_page(&ViewState::default()))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(input): Form<FormInput>,
) -> Html<String> {
    let mut view = ViewState::default();
    view.submit(state.best_api.as_ref(), input).await;
    Html(render_page(&view))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index).post(submit))
}

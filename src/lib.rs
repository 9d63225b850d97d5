pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod geo;
pub mod optimizer;
pub mod resolver;
pub mod tequila;
pub mod view;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use tequila::{FlightProvider, TequilaClient};
use view::{BestApi, HttpBestApi};

pub use error::{OptimizerError, Result};

pub struct AppState {
    pub provider: Arc<dyn FlightProvider>,
    pub best_api: Arc<dyn BestApi>,
    pub currency: String,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> Arc<Self> {
        Arc::new(Self {
            provider: Arc::new(TequilaClient::from_config(cfg)),
            best_api: Arc::new(HttpBestApi::new(&cfg.api_base_url)),
            currency: cfg.currency.clone(),
        })
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flight_optimizer=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(view::router())
        .nest("/api", api::router())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}

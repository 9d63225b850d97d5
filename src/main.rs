use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::error;

use flight_optimizer::{
    api::NO_RESULTS,
    build_app,
    cli::{Cli, Commands},
    config::AppConfig,
    init_tracing,
    optimizer::find_best,
    run_server,
    tequila::TequilaClient,
    AppState,
};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let cfg = AppConfig::from_env();

    match cli.command {
        None => serve(cfg).await,
        Some(Commands::Serve { port }) => {
            let cfg = match port {
                Some(port) => cfg.with_port(port),
                None => cfg,
            };
            serve(cfg).await
        }
        Some(Commands::Best { from, to, json }) => best(&cfg, &from, &to, json).await,
    }
}

async fn serve(cfg: AppConfig) -> ExitCode {
    let app = build_app(AppState::from_config(&cfg));
    match run_server(app, cfg.port).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, port = cfg.port, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn best(cfg: &AppConfig, from: &str, to: &[String], json: bool) -> ExitCode {
    let provider = TequilaClient::from_config(cfg);
    let result = match find_best(&provider, from, to, Utc::now(), &cfg.currency).await {
        Ok(result) => result,
        Err(err) => {
            error!(error = %err, "lookup failed");
            return ExitCode::FAILURE;
        }
    };

    match (result, json) {
        (None, _) => println!("{NO_RESULTS}"),
        (Some(value), true) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                error!(error = %err, "failed to encode result");
                return ExitCode::FAILURE;
            }
        },
        (Some(value), false) => {
            println!("{}", value.best.destination);
            println!("${}/km", value.best.price_per_km);
        }
    }
    ExitCode::SUCCESS
}

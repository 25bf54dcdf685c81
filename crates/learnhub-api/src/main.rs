//! Learning Hub chat proxy and site API entry point.
//!
//! Binary name: `learnhub`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! requested command or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;

use cli::{Cli, Commands};
use learnhub_infra::config::{AppConfig, load_file_config};
use learnhub_observe::tracing_setup::{init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_filter(), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))?;

    let file_config = load_file_config(&cli.config).await;
    let config = AppConfig::from_env(file_config);

    let result = run(cli, config).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let state = AppState::init(&config)?;

            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(
                %addr,
                gateway = %config.gateway_endpoint,
                model = %config.gateway_model,
                "Learning Hub API listening"
            );
            println!("  Learning Hub API listening on http://{addr}");
            println!("  Press Ctrl+C to stop");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Courses => {
            cli::courses::list_courses(cli.json)?;
        }

        Commands::Prompt {
            course,
            with_knowledge,
        } => {
            let state = AppState::init(&config)?;
            cli::prompt::print_prompt(&state, course.as_deref(), with_knowledge, cli.json).await?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

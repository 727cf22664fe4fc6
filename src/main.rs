use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::Request;
use axum::response::IntoResponse;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use showroom_core::bootstrap::{bootstrap, RouterSource};
use showroom_core::domain::system::service::status_service;
use showroom_core::errors::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing();
    status_service::mark_started();

    let port: u16 = std::env::var("SHOWROOM_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, source = ?RouterSource::detect(), "Server starting");

    // Every request goes through the same entry point the serverless
    // deployment exports.
    let service = tower::service_fn(|request: Request| async {
        match bootstrap().handle(request).await {
            Ok(response) => Ok::<_, Infallible>(response),
            Err(err) => {
                error!(error = %format!("{err:#}"), "Invocation failed");
                Ok(AppError::InternalServerError(format!("{err:#}")).into_response())
            }
        }
    });

    axum::serve(listener, tower::make::Shared::new(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "showroom.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .init();

    guard
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to install shutdown handler");
    }
    info!("Shutting down");
}

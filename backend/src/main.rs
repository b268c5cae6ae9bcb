//! Engage Local entry-point: loads settings and the example dataset, then
//! serves the HTTP API until SIGINT or SIGTERM.

mod server;

use std::ffi::OsString;
use std::process::ExitCode;

use actix_web::dev::ServerHandle;
use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use engage_local::example_data::load_community_repository;
use engage_local::inbound::http::health::HealthState;
use engage_local::settings::ServerSettings;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    if let Err(e) = color_eyre::install() {
        warn!(error = %e, "error report hook install failed");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            error!(error = ?report, "server terminated with a fatal error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let settings = ServerSettings::load_from_iter(args)
        .map_err(|e| eyre!("failed to load settings: {e}"))?;
    let config = ServerConfig::from_settings(&settings)
        .wrap_err_with(|| format!("invalid ENGAGE_HOST '{}'", settings.host()))?;
    let repository =
        load_community_repository(&settings).wrap_err("failed to prepare community dataset")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), repository, config)
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(
        addr = %config.bind_addr(),
        environment = ?config.environment,
        "server listening"
    );

    actix_web::rt::spawn(shutdown_on_signal(server.handle(), health_state));
    server.await.wrap_err("server error")?;
    info!("server stopped");
    Ok(())
}

/// Stop the server gracefully on SIGINT or SIGTERM.
async fn shutdown_on_signal(handle: ServerHandle, health_state: web::Data<HealthState>) {
    wait_for_signal().await;
    info!("shutdown signal received");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            warn!(error = %e, "SIGTERM handler unavailable; listening for SIGINT only");
            wait_for_ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        () = wait_for_ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "SIGINT handler unavailable");
        std::future::pending::<()>().await;
    }
}

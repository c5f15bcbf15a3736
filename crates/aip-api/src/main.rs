//! # aip-api — Binary Entry Point
//!
//! Parses configuration, wires the selected backends, and starts the
//! Axum HTTP server (HTTPS when a TLS certificate and key are given).

use std::net::SocketAddr;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use aip_api::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    if let Err(err) = config.validate() {
        eprintln!("configuration error: {err}");
        eprintln!("{}", Config::command().render_usage());
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let state = match aip_api::bootstrap::bootstrap(&config).await {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    let app = aip_api::app(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));

    let served = if config.tls_enabled() {
        serve_tls(&config, addr, app).await
    } else {
        serve_plain(addr, app).await
    };

    if let Err(err) = served {
        tracing::error!(error = %err, "server exited with error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn serve_plain(addr: SocketAddr, app: axum::Router) -> std::io::Result<()> {
    tracing::info!("AIP resolver listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn serve_tls(config: &Config, addr: SocketAddr, app: axum::Router) -> std::io::Result<()> {
    // tls_enabled() guarantees both paths are present.
    let (Some(cert), Some(key)) = (config.tls_cert.clone(), config.tls_key.clone()) else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "TLS requires both a certificate and a key",
        ));
    };
    let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert, key).await?;
    tracing::info!("AIP resolver listening on https://{addr}");
    axum_server::bind_rustls(addr, tls)
        .serve(app.into_make_service())
        .await
}

use std::path::Path;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use otp_api::{configure, env_files, telemetry, AppState};
use otp_core::services::{IssuerConfig, OtpIssuer};
use otp_infra::create_messaging_client;
use otp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_files::load_env_files(Path::new("."));

    let config = AppConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;

    telemetry::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        provider = ?config.sms.provider,
        "Starting OtpGate API server"
    );

    let client = create_messaging_client(&config.sms).context("Failed to create SMS client")?;
    let issuer = Arc::new(OtpIssuer::new(client, IssuerConfig::from(&config.sms)));
    let state = web::Data::new(AppState::new(issuer));
    let max_payload_size = config.server.max_payload_size;

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(max_payload_size))
            .configure(configure)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

use actix_web::web;
use tracing::{error, info};

use crate::domain::error::Result;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::logging;
use crate::interfaces::http::{start_server, AppState};

pub async fn run() -> Result<()> {
    let config = AppConfig::load().map_err(|err| {
        eprintln!("Failed to load configuration: {}", err);
        err
    })?;
    logging::init(&config.log_filter);

    let state = web::Data::new(AppState::from_config(&config));
    let server = start_server(&config, state).map_err(|err| {
        error!(error = %err, "Failed to bind HTTP server");
        err
    })?;

    server.await?;
    info!("Server shut down");
    Ok(())
}

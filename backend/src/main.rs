//! Backend entry-point: connects the item store, then serves the REST API,
//! health probes and OpenAPI docs.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use listings_backend::inbound::http::health::HealthState;
use listings_backend::outbound::persistence::connect;
use listings_backend::settings::ServerSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let store_config = settings.store_config();
    let items = match connect(&store_config).await {
        Ok(items) => items,
        Err(e) => {
            error!(
                error = %e,
                database = store_config.database(),
                "failed to connect to item store"
            );
            return Err(io::Error::other(e));
        }
    };

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, items))?;
    info!(%bind_addr, "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}

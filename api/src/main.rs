use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use rent_api::{config, create_app, AppState};
use rent_core::services::booking::BookingServiceConfig;
use rent_infra::{create_booking_store, create_checkout_gateway};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load();
    config::init_logging(&app_config.logging);

    info!(
        "Starting MauriRent API Server ({} environment)",
        app_config.environment
    );

    let store = create_booking_store(&app_config.database)
        .await
        .context("failed to initialize booking storage")?;
    let gateway =
        create_checkout_gateway(&app_config.payment).context("failed to initialize checkout gateway")?;

    info!(
        "Using {} storage and {} checkout",
        store.backend_name(),
        gateway.provider_name()
    );

    let booking_config = BookingServiceConfig::from(&app_config.booking);
    info!(
        "Booking rules: availability={:?}, creation={:?}, serialized={}",
        booking_config.availability_rule, booking_config.creation_rule, booking_config.serialize_per_listing
    );

    let app_state = web::Data::new(AppState::new(Arc::new(store), Arc::new(gateway), booking_config));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = app_config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &server_config))
        .keep_alive(std::time::Duration::from_secs(app_config.server.keep_alive));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    Ok(())
}

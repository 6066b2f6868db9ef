// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, the maps client, and start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use location_finder::config::Config;
use location_finder::handlers;
use location_finder::services::{GoogleMapsClient, MapsService};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            format!("{},actix_web=info", config.log_level)
        } else {
            "info,actix_web=info".to_string()
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    log::info!("Starting location-finder service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );
    log::info!(
        "Returning up to {} pairs, minimum {} categories, unresolved regions: {:?}",
        config.max_results,
        config.min_categories,
        config.unresolved_region_policy
    );

    // 4. Build the maps client once; the API key is not read again
    let maps: Arc<dyn MapsService> = Arc::new(GoogleMapsClient::from_config(&config));
    let maps = web::Data::from(maps);

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (config and maps client)
            .app_data(config.clone())
            .app_data(maps.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::pairs_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}

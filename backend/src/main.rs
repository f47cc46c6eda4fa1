mod config;
mod error;
mod routes;
mod upstream;

#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use config::GatewayConfig;
use routes::configure_routes;
use std::env;
use upstream::UpstreamClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = GatewayConfig::from_env().map_err(|e| {
        log::error!("Invalid gateway configuration: {}", e);
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Configuration error: {}", e),
        )
    })?;
    log::info!("Loaded configuration: {:?}", config);

    let upstream = UpstreamClient::new(&config).map_err(|e| {
        log::error!("Failed to build upstream HTTP client: {}", e);
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("HTTP client error: {}", e),
        )
    })?;

    if config.read_retry {
        log::info!("Star lookups retry once on connect or timeout failures");
    }
    log::info!("Forwarding predictions to {}", config.upstream_base_url);

    let frontend_dir = config.frontend_dir.clone();
    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(upstream.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}

mod config;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::ServerConfig;
use routes::{RelayState, configure_routes};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::load().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    if !config.frontend_dir.join("index.html").exists() {
        log::warn!(
            "No index.html in {}; run `trunk build` in frontend/ first",
            config.frontend_dir.display()
        );
    }

    let client = reqwest::Client::builder()
        .timeout(config.upstream_timeout())
        .build()
        .map_err(io::Error::other)?;

    let state = web::Data::new(RelayState {
        client,
        inference_url: config.inference_url.clone(),
        max_upload_bytes: config.max_upload_bytes,
    });

    let bind_address = config.bind_address();
    let frontend_dir = config.frontend_dir.clone();
    log::info!("Relaying predictions to {}", config.inference_url);
    log::info!("Serving {} on {}", frontend_dir.display(), bind_address);

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
            .wrap(actix_web::middleware::Logger::default())
            .app_data(state.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}

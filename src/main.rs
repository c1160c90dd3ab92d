use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

mod api;
mod config;
mod errors;
mod models;
mod services;

use crate::{
    api::AppState,
    services::price_service::{PriceCache, PriceService},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(std::io::Error::other)?;
    let price_service = PriceService::new(&config).map_err(std::io::Error::other)?;

    let prices = PriceCache::new();
    if let Err(e) = price_service.refresh(&prices).await {
        warn!("starting with an empty price list: {}", e);
    }

    let bind = (config.host.clone(), config.port);
    let allowed_origins = config.allowed_origins.clone();
    let state = web::Data::new(AppState {
        config,
        prices,
        price_service,
    });

    info!("listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials();
        App::new()
            .app_data(state.clone())
            .configure(api::config)
            .wrap(cors)
            .wrap(Logger::default())
    })
    .bind(bind)?
    .run()
    .await
}

use actix_web::web;

use crate::{
    config::Config,
    errors::CustomError,
    services::price_service::{PriceCache, PriceService},
};

mod handlers;

/// Shared state handed to every handler.
pub struct AppState {
    pub config: Config,
    pub prices: PriceCache,
    pub price_service: PriceService,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // extractor failures use the same failure envelope as handler errors
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                CustomError::ValidationError(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                CustomError::ValidationError(err.to_string()).into()
            }))
            .service(handlers::sum_to_n)
            .service(handlers::compare_sums)
            .service(handlers::list_prices)
            .service(handlers::list_currencies)
            .service(handlers::refresh_prices)
            .service(handlers::convert_currency)
            .service(handlers::format_balances),
    );
}

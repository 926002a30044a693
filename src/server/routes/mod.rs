//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod calculator;
pub mod history;

use crate::utils::error::CalculatorError;
use actix_web::web;
use tracing::debug;

/// Register the calculator routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calculator")
            .route("/sum", web::post().to(calculator::sum))
            .route("/subtract", web::post().to(calculator::subtract))
            .route("/multiply", web::post().to(calculator::multiply))
            .route("/divide", web::post().to(calculator::divide))
            .route("/batch", web::post().to(calculator::batch))
            .route("/history", web::get().to(history::get_history)),
    );
}

/// JSON extractor settings: body size limit, malformed bodies answered with 422
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            debug!("Rejected request body: {}", err);
            CalculatorError::invalid_request(err.to_string()).into()
        })
}

/// Query extractor settings, malformed query strings answered with 422
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        debug!("Rejected query string: {}", err);
        CalculatorError::invalid_request(err.to_string()).into()
    })
}

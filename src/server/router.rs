//! HTTP routing configuration.
//!
//! Defines the game endpoints, the JSON extractor error handling and the
//! CORS headers every response carries.

use actix_web::middleware::DefaultHeaders;
use actix_web::web;

use crate::config::server::{
    CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN, CORS_MAX_AGE_SECS,
};
use crate::server::game_session::handlers::{
    get_game, get_game_debug, health, method_not_allowed, not_found, post_action, post_reset,
};
use crate::server::http_error::json_error_handler;

/// Headers added to every response that does not already set them.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Methods", CORS_ALLOW_METHODS))
        .add(("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS))
        .add(("Access-Control-Max-Age", CORS_MAX_AGE_SECS.to_string()))
        .add(("Content-Type", "application/json"))
}

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/")
                .route(web::get().to(health))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/game")
                .route(web::get().to(get_game))
                .route(web::post().to(post_action))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/game/debug")
                .route(web::get().to(get_game_debug))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/reset")
                .route(web::post().to(post_reset))
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::to(not_found));
}

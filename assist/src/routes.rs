use actix_web::web;

use crate::handlers;

pub const GENERATE_QUERY_PATH: &str = "/api/assist/generate_query";
pub const SUMMARIZE_PATH: &str = "/api/assist/summarize";
pub const LANGUAGES_PATH: &str = "/api/assist/languages";
pub const HEALTH_PATH: &str = "/health";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(GENERATE_QUERY_PATH, web::post().to(handlers::generate_query))
        .route(SUMMARIZE_PATH, web::post().to(handlers::summarize))
        .route(LANGUAGES_PATH, web::get().to(handlers::configured_languages))
        .route(HEALTH_PATH, web::get().to(handlers::health));
}

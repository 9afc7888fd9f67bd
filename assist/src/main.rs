use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assist::{routes, AppState};
use assist_config::AssistConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting QueryAssist Service");

    // Read configuration
    let port = env::var("ASSIST_PORT")
        .unwrap_or_else(|_| "3007".to_string())
        .parse::<u16>()
        .expect("Invalid ASSIST_PORT");

    let host = env::var("ASSIST_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

    let config = AssistConfig::from_env();

    tracing::info!("   Agent service: {}", config.agent_service_url);
    tracing::info!("   Search service: {}", config.search_service_url);
    if config.ppl_agent_id.is_none() {
        tracing::warn!("PPL_AGENT_ID is not set; query generation is disabled");
    }
    if config.response_summary_agent_id.is_none() || config.error_summary_agent_id.is_none() {
        tracing::warn!("Summary agent ids are not set; summarization is disabled");
    }

    let state = web::Data::new(AppState::new(config));

    // Start HTTP server
    tracing::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

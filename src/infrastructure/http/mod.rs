pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use crate::controllers::{health, pairs::PairsController, tts::TtsController};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::TtsRepository;

/// Build the application router with every route and layer attached
pub fn build_router(
    config: &Config,
    tts_repo: Arc<dyn TtsRepository>,
    pairs_controller: Arc<PairsController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    // Pair parsing routes (uploads get their own body limit)
    let pairs_routes = Router::new()
        .route(
            "/api/upload-file",
            post(PairsController::upload_file)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route("/api/parse-bulk-text", post(PairsController::parse_bulk_text))
        .with_state(pairs_controller);

    // Synthesis routes
    let tts_routes = Router::new()
        .route("/api/bulk-tts", post(TtsController::bulk_tts))
        .route("/api/languages", get(TtsController::languages))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_repo)
        .merge(pairs_routes)
        .merge(tts_routes)
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured browser origins, with credentials
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([HeaderName::from_static(X_REQUEST_ID)])
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_repo: Arc<dyn TtsRepository>,
    pairs_controller: Arc<PairsController>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, tts_repo, pairs_controller, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

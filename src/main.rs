use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use bulk_tts_backend::controllers::{pairs::PairsController, tts::TtsController};
use bulk_tts_backend::domain::pairs::PairService;
use bulk_tts_backend::domain::tts::BulkTtsService;
use bulk_tts_backend::infrastructure::audio::Mp3Codec;
use bulk_tts_backend::infrastructure::config::{Config, LogFormat, TtsProvider};
use bulk_tts_backend::infrastructure::http::start_http_server;
use bulk_tts_backend::infrastructure::repositories::{
    GoogleTtsRepository, OpenAiTtsRepository, PollyTtsRepository, TtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Bulk TTS Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the speech provider
    let tts_repo = create_tts_repository(&config).await?;
    tracing::info!(provider = tts_repo.provider_id(), "TTS provider initialized");

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let codec = Arc::new(Mp3Codec::new(config.output_sample_rate));
    let pair_service = Arc::new(PairService::new());
    let bulk_tts_service = Arc::new(BulkTtsService::new(
        tts_repo.clone(),
        codec,
        config.synthesis_concurrency,
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let pairs_controller = Arc::new(PairsController::new(pair_service));
    let tts_controller = Arc::new(TtsController::new(bulk_tts_service));

    // Start HTTP server with all routes
    start_http_server(config, tts_repo, pairs_controller, tts_controller).await?;

    Ok(())
}

async fn create_tts_repository(
    config: &Config,
) -> Result<Arc<dyn TtsRepository>, Box<dyn std::error::Error>> {
    let repo: Arc<dyn TtsRepository> = match config.tts_provider {
        TtsProvider::Google => Arc::new(GoogleTtsRepository::new(
            config.google_tts_base_url.clone(),
            Duration::from_secs(config.tts_http_timeout_secs),
        )?),
        TtsProvider::Polly => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);

            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
            if !has_access_key || !has_secret_key {
                tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
            }

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;

            let polly_client = aws_sdk_polly::Client::new(&aws_config);
            Arc::new(PollyTtsRepository::new(Arc::new(polly_client)))
        }
        TtsProvider::OpenAi => {
            if std::env::var("OPENAI_API_KEY").is_err() {
                tracing::warn!("OPENAI_API_KEY is not set, synthesis requests will fail");
            }

            let client = async_openai::Client::new();
            Arc::new(OpenAiTtsRepository::new(
                Arc::new(client),
                config.openai_tts_model.clone(),
                config.openai_tts_voice.clone(),
            ))
        }
    };

    Ok(repo)
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "bulk_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "bulk_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

use anyhow::Result;
use axum::Router;
use bulk_tts_backend::infrastructure::config::{Config, LogFormat, TtsProvider};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod assertions;

use api_client::TestClient;
use fake_tts::FakeTtsRepository;

/// Upload limit used by the test server, kept small so the 413 path is cheap to hit
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

pub const TEST_SAMPLE_RATE: u32 = 24_000;

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    #[allow(dead_code)]
    pub tts: Arc<FakeTtsRepository>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = test_config();
            let tts = Arc::new(FakeTtsRepository::new(TEST_SAMPLE_RATE));

            let app = create_app(&config, tts.clone()).expect("Failed to create app");

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

            Self {
                client: TestClient::new(&base_url),
                config,
                tts,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        log_format: LogFormat::Pretty,
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        tts_provider: TtsProvider::Google,
        google_tts_base_url: "http://127.0.0.1:9".to_string(),
        tts_http_timeout_secs: 1,
        aws_region: "us-east-1".to_string(),
        openai_tts_model: "tts-1".to_string(),
        openai_tts_voice: "alloy".to_string(),
        synthesis_concurrency: 4,
        output_sample_rate: TEST_SAMPLE_RATE,
    }
}

fn create_app(config: &Config, tts: Arc<FakeTtsRepository>) -> Result<Router> {
    use bulk_tts_backend::{
        controllers::{pairs::PairsController, tts::TtsController},
        domain::{pairs::PairService, tts::BulkTtsService},
        infrastructure::{
            audio::Mp3Codec, http::build_router, repositories::TtsRepository,
        },
    };

    let tts_repo: Arc<dyn TtsRepository> = tts;
    let codec = Arc::new(Mp3Codec::new(config.output_sample_rate));

    // Instantiate services
    let pair_service = Arc::new(PairService::new());
    let bulk_tts_service = Arc::new(BulkTtsService::new(
        tts_repo.clone(),
        codec,
        config.synthesis_concurrency,
    ));

    // Instantiate controllers
    let pairs_controller = Arc::new(PairsController::new(pair_service));
    let tts_controller = Arc::new(TtsController::new(bulk_tts_service));

    Ok(build_router(config, tts_repo, pairs_controller, tts_controller))
}

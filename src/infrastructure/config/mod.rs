use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    // Speech synthesis
    pub tts_provider: TtsProvider,
    pub google_tts_base_url: String,
    pub tts_http_timeout_secs: u64,
    pub aws_region: String,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    // Assembly
    pub synthesis_concurrency: usize,
    pub output_sample_rate: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Google,
    Polly,
    OpenAi,
}

impl std::str::FromStr for TtsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(TtsProvider::Google),
            "polly" => Ok(TtsProvider::Polly),
            "openai" => Ok(TtsProvider::OpenAi),
            other => Err(format!(
                "unknown TTS_PROVIDER '{}', expected google, polly or openai",
                other
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "5242880".to_string())
                .parse()?,
            tts_provider: env::var("TTS_PROVIDER")
                .unwrap_or_else(|_| "google".to_string())
                .parse()?,
            google_tts_base_url: env::var("GOOGLE_TTS_BASE_URL")
                .unwrap_or_else(|_| "https://translate.google.com".to_string()),
            tts_http_timeout_secs: env::var("TTS_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            openai_tts_model: env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            openai_tts_voice: env::var("OPENAI_TTS_VOICE").unwrap_or_else(|_| "alloy".to_string()),
            synthesis_concurrency: env::var("SYNTHESIS_CONCURRENCY")
                .unwrap_or_else(|_| "1".to_string())
                .parse::<usize>()?
                .max(1),
            output_sample_rate: env::var("OUTPUT_SAMPLE_RATE")
                .unwrap_or_else(|_| "24000".to_string())
                .parse()?,
        };

        Ok(config)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

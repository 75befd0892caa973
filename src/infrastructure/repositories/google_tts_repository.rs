use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::tts::LanguageCode;
use async_trait::async_trait;
use std::time::Duration;

/// Google Translate speech accepts at most 100 characters per request
const MAX_BATCH_SIZE: usize = 100;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Google Translate text-to-speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Language tag understood by the translate_tts endpoint
    fn tl_for_language(language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::Chinese => "zh-CN",
            other => other.as_str(),
        }
    }

    /// Fetch one batch of speech
    async fn call_google(
        &self,
        text: &str,
        language: LanguageCode,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let url = format!("{}/translate_tts", self.base_url);
        let text_len = text.chars().count().to_string();
        let total = total.to_string();
        let index = index.to_string();

        tracing::info!(
            language = %language,
            batch_index = %index,
            text_length = %text_len,
            "Calling Google Translate TTS"
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", Self::tl_for_language(language)),
                ("client", "tw-ob"),
                ("ttsspeed", "1"),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", text_len.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = %language, "Google TTS request failed");
                format!("Google TTS request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                language = %language,
                "Google TTS rejected the request"
            );
            return Err(format!(
                "Google TTS returned {} for language '{}'",
                status, language
            ));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Google TTS audio: {}", e))?
            .to_vec();

        tracing::debug!(audio_size = audio_bytes.len(), "Google TTS batch received");

        Ok(audio_bytes)
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        if text.trim().is_empty() {
            return Err("No text to speak".to_string());
        }

        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let total = batches.len();

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_google(batch, language, index, total).await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "google",
            language = %language,
            latency_ms = start_time.elapsed().as_millis() as u64,
            characters_count = text.chars().count(),
            batch_count = total,
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }

    fn provider_id(&self) -> &'static str {
        "google"
    }
}

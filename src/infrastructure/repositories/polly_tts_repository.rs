use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::tts::LanguageCode;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Select the Polly voice for a language, if Polly has one
    fn get_voice_for_language(language: LanguageCode) -> Option<&'static str> {
        match language {
            LanguageCode::English => Some("Joanna"),
            LanguageCode::German => Some("Vicki"),
            LanguageCode::Spanish => Some("Lucia"),
            LanguageCode::French => Some("Lea"),
            LanguageCode::Italian => Some("Bianca"),
            LanguageCode::Polish => Some("Ola"),
            LanguageCode::Portuguese => Some("Ines"),
            LanguageCode::Russian => Some("Tatyana"),
            LanguageCode::Japanese => Some("Kazuha"),
            LanguageCode::Korean => Some("Seoyeon"),
            LanguageCode::Chinese => Some("Zhiyu"),
            LanguageCode::Ukrainian => None,
        }
    }

    /// Neural voices sound better; the rest only run on the standard engine
    fn engine_for_voice(voice: &str) -> Engine {
        const NEURAL_VOICES: &[&str] = &[
            "Joanna", "Vicki", "Lucia", "Lea", "Bianca", "Ola", "Ines", "Kazuha", "Seoyeon",
            "Zhiyu",
        ];

        if NEURAL_VOICES.contains(&voice) {
            Engine::Neural
        } else {
            Engine::Standard
        }
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(
        &self,
        text: &str,
        language_code: LanguageCode,
        voice_name: &'static str,
    ) -> Result<Vec<u8>, String> {
        let voice_id = VoiceId::from(voice_name);
        let engine = Self::engine_for_voice(voice_name);

        tracing::info!(
            language = %language_code,
            voice = voice_name,
            engine = ?engine,
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    language = %language_code,
                    voice = voice_name,
                    engine = ?engine,
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        if text.trim().is_empty() {
            return Err("No text to speak".to_string());
        }

        let voice_name = Self::get_voice_for_language(language).ok_or_else(|| {
            format!(
                "AWS Polly has no voice for language '{}' ({})",
                language,
                language.display_name()
            )
        })?;

        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut merged_audio = Vec::new();
        for batch in &batches {
            let audio_data = self.call_polly(batch, language, voice_name).await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis() as u64,
            characters_count = text.chars().count(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }

    fn provider_id(&self) -> &'static str {
        "polly"
    }
}

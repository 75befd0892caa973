use super::dto::TextPair;
use super::error::TtsServiceError;
use super::language::LanguageCode;
use crate::domain::audio::AudioSegment;
use crate::infrastructure::audio::AudioCodec;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use futures::{stream, StreamExt, TryStreamExt};
use std::sync::Arc;
use std::time::Duration;

/// Silence inserted after each side of every pair
pub const PAIR_GAP: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct BulkSynthesisResult {
    pub audio_data: Vec<u8>,
    pub format: &'static str,
    pub pair_count: usize,
    pub duration: Duration,
}

pub struct BulkTtsService {
    tts_repo: Arc<dyn TtsRepository>,
    codec: Arc<dyn AudioCodec>,
    concurrency: usize,
}

impl BulkTtsService {
    /// `concurrency` is how many pairs may be synthesized at once; 1 keeps
    /// the pipeline strictly sequential.
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        codec: Arc<dyn AudioCodec>,
        concurrency: usize,
    ) -> Self {
        Self {
            tts_repo,
            codec,
            concurrency: concurrency.max(1),
        }
    }
}

#[async_trait]
pub trait BulkTtsServiceApi: Send + Sync {
    /// Speak every pair and join the clips into one encoded audio file
    ///
    /// Each pair contributes `text1`, a gap, `text2` and another gap, in
    /// input order. The first failing pair fails the whole request.
    async fn assemble(&self, pairs: Vec<TextPair>) -> Result<BulkSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl BulkTtsServiceApi for BulkTtsService {
    async fn assemble(&self, pairs: Vec<TextPair>) -> Result<BulkSynthesisResult, TtsServiceError> {
        tracing::info!(
            pair_count = pairs.len(),
            provider = self.tts_repo.provider_id(),
            concurrency = self.concurrency,
            "Bulk TTS request"
        );

        let start_time = std::time::Instant::now();

        let segment = self.assemble_segment(&pairs).await?;
        let duration = segment.duration();

        let codec = self.codec.clone();
        let audio_data = tokio::task::spawn_blocking(move || codec.encode(&segment))
            .await
            .map_err(|e| anyhow::anyhow!("encoder task failed: {}", e))??;

        tracing::info!(
            pair_count = pairs.len(),
            duration_ms = duration.as_millis() as u64,
            audio_size_bytes = audio_data.len(),
            latency_ms = start_time.elapsed().as_millis() as u64,
            "Bulk TTS audio assembled"
        );

        Ok(BulkSynthesisResult {
            audio_data,
            format: self.codec.format(),
            pair_count: pairs.len(),
            duration,
        })
    }
}

impl BulkTtsService {
    /// Build the decoded stream for all pairs without encoding it
    pub async fn assemble_segment(
        &self,
        pairs: &[TextPair],
    ) -> Result<AudioSegment, TtsServiceError> {
        let sample_rate = self.codec.sample_rate();
        let silence = AudioSegment::silent(PAIR_GAP, sample_rate);
        let mut combined = AudioSegment::empty(sample_rate);

        // buffered() yields results in input order whatever order they finish in
        let rendered = stream::iter(pairs.to_vec().into_iter().enumerate())
            .map(|(index, pair)| async move { self.render_pair(index, &pair).await })
            .buffered(self.concurrency);
        let mut rendered = std::pin::pin!(rendered);

        while let Some((first, second)) = rendered.try_next().await? {
            combined.append(&first);
            combined.append(&silence);
            combined.append(&second);
            combined.append(&silence);
        }

        Ok(combined)
    }

    async fn render_pair(
        &self,
        index: usize,
        pair: &TextPair,
    ) -> Result<(AudioSegment, AudioSegment), TtsServiceError> {
        let first = self.render_side(&pair.text1, &pair.language1).await?;
        let second = self.render_side(&pair.text2, &pair.language2).await?;

        tracing::debug!(
            pair_index = index,
            first_ms = first.duration().as_millis() as u64,
            second_ms = second.duration().as_millis() as u64,
            "Pair rendered"
        );

        Ok((first, second))
    }

    async fn render_side(&self, text: &str, code: &str) -> Result<AudioSegment, TtsServiceError> {
        let language = LanguageCode::from_code(code)
            .ok_or_else(|| TtsServiceError::Synthesis(format!("Language not supported: {}", code)))?;

        let clip = self
            .tts_repo
            .synthesize(text, language)
            .await
            .map_err(TtsServiceError::Synthesis)?;

        let codec = self.codec.clone();
        let segment = tokio::task::spawn_blocking(move || codec.decode(&clip))
            .await
            .map_err(|e| anyhow::anyhow!("decoder task failed: {}", e))??;

        Ok(segment)
    }
}

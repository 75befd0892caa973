use crate::domain::tts::LanguageCode;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Translate, AWS Polly, OpenAI)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single audio stream
/// - Provider-specific voice selection
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language at normal speed
    ///
    /// Returns encoded audio data (MP3 for the bundled providers)
    ///
    /// # Errors
    /// Returns error if the text is blank, the provider cannot voice the
    /// language, or the provider is unavailable
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String>;

    /// Short provider name used in logs and the readiness probe
    fn provider_id(&self) -> &'static str;
}

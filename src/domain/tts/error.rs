use crate::error::AppError;
use crate::infrastructure::audio::AudioError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{0}")]
    Synthesis(String),
    #[error("{0}")]
    Assembly(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AudioError> for TtsServiceError {
    fn from(err: AudioError) -> Self {
        TtsServiceError::Assembly(err.to_string())
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            TtsServiceError::Assembly(msg) => AppError::Assembly(msg),
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

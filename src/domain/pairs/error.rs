use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PairParseError {
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    UnsupportedFileType(String),
    #[error("{0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<PairParseError> for AppError {
    fn from(err: PairParseError) -> Self {
        match err {
            PairParseError::Decode(msg) => AppError::Decode(msg),
            PairParseError::UnsupportedFileType(name) => AppError::UnsupportedFileType(name),
            PairParseError::MalformedJson(e) => AppError::MalformedJson(e.to_string()),
            PairParseError::Csv(e) => AppError::BadRequest(e.to_string()),
        }
    }
}

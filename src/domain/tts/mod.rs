pub mod dto;
pub mod error;
pub mod language;
pub mod service;

pub use dto::{BulkTtsRequest, BulkTtsResponse, LanguageInfo, LanguagesResponse, TextPair};
pub use error::TtsServiceError;
pub use language::{LanguageCode, SUPPORTED_LANGUAGES};
pub use service::{BulkTtsService, BulkTtsServiceApi, PAIR_GAP};

use serde::{Deserialize, Serialize};

use super::language::LanguageCode;

/// One pair to speak, each side in its own language.
///
/// Languages stay as raw codes here; an unknown code fails synthesis of the
/// side that uses it rather than the whole request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPair {
    pub text1: String,
    pub text2: String,
    pub language1: String,
    pub language2: String,
}

/// Request for POST /api/bulk-tts
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkTtsRequest {
    pub pairs: Vec<TextPair>,
}

/// Response for POST /api/bulk-tts
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkTtsResponse {
    /// Base64 encoded audio file
    pub audio: String,
    pub format: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

impl From<LanguageCode> for LanguageInfo {
    fn from(language: LanguageCode) -> Self {
        Self {
            code: language.as_str().to_string(),
            name: language.display_name().to_string(),
        }
    }
}

/// Response for GET /api/languages
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

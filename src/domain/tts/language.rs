use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes supported by the TTS system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh")]
    Chinese,
}

/// Every supported language, in the order `GET /api/languages` lists them
pub const SUPPORTED_LANGUAGES: &[LanguageCode] = &[
    LanguageCode::English,
    LanguageCode::German,
    LanguageCode::Ukrainian,
    LanguageCode::Spanish,
    LanguageCode::French,
    LanguageCode::Italian,
    LanguageCode::Polish,
    LanguageCode::Portuguese,
    LanguageCode::Russian,
    LanguageCode::Japanese,
    LanguageCode::Korean,
    LanguageCode::Chinese,
];

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::German => "de",
            LanguageCode::Ukrainian => "uk",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::Italian => "it",
            LanguageCode::Polish => "pl",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Russian => "ru",
            LanguageCode::Japanese => "ja",
            LanguageCode::Korean => "ko",
            LanguageCode::Chinese => "zh",
        }
    }

    /// Human-readable name shown by clients
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::German => "German",
            LanguageCode::Ukrainian => "Ukrainian",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::French => "French",
            LanguageCode::Italian => "Italian",
            LanguageCode::Polish => "Polish",
            LanguageCode::Portuguese => "Portuguese",
            LanguageCode::Russian => "Russian",
            LanguageCode::Japanese => "Japanese",
            LanguageCode::Korean => "Korean",
            LanguageCode::Chinese => "Chinese",
        }
    }

    /// Look up a code from the supported table
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|language| language.as_str() == code)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

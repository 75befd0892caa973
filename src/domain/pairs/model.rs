use serde::{Deserialize, Serialize};

/// One parsed pair of texts, before the client assigns languages to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDraft {
    pub text1: String,
    pub text2: String,
}

impl PairDraft {
    /// Build a pair from two raw fields, trimming both.
    ///
    /// Returns `None` when either side is empty after trimming.
    pub fn from_fields(first: &str, second: &str) -> Option<Self> {
        let text1 = first.trim();
        let text2 = second.trim();

        if text1.is_empty() || text2.is_empty() {
            return None;
        }

        Some(Self {
            text1: text1.to_string(),
            text2: text2.to_string(),
        })
    }
}

/// Response for the pair parsing endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct PairsResponse {
    pub pairs: Vec<PairDraft>,
}

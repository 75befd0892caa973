use super::encoding::detect_and_decode;
use super::error::PairParseError;
use super::model::PairDraft;
use super::parser::{parse_delimited, parse_json, parse_lines};

/// How an uploaded file is turned into pairs, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Delimited,
    Json,
}

impl UploadKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".csv") || filename.ends_with(".txt") {
            Some(UploadKind::Delimited)
        } else if filename.ends_with(".json") {
            Some(UploadKind::Json)
        } else {
            None
        }
    }
}

/// Turns bulk input (uploaded files, pasted text) into text pairs
#[derive(Debug, Default, Clone)]
pub struct PairService;

impl PairService {
    pub fn new() -> Self {
        Self
    }

    /// Parse an uploaded file.
    ///
    /// The extension is checked before the content is touched, then the bytes
    /// are decoded with the detected encoding and handed to the parser.
    pub fn parse_upload(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<Vec<PairDraft>, PairParseError> {
        let kind = UploadKind::from_filename(filename)
            .ok_or_else(|| PairParseError::UnsupportedFileType(filename.to_string()))?;

        tracing::info!(
            filename = %filename,
            kind = ?kind,
            byte_count = bytes.len(),
            "Parsing uploaded file"
        );

        let content = detect_and_decode(bytes)?;

        match kind {
            UploadKind::Delimited => parse_delimited(&content),
            UploadKind::Json => parse_json(&content),
        }
    }

    /// Parse pasted text where lines alternate between the two sides of a pair
    pub fn parse_bulk_text(&self, text: &str) -> Vec<PairDraft> {
        parse_lines(text)
    }
}

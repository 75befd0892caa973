use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use super::error::PairParseError;

/// Guess the text encoding of an uploaded file and decode it.
///
/// A single best-guess pass: if the guessed encoding cannot decode the bytes
/// cleanly the upload is rejected. A byte order mark overrides the guess.
pub fn detect_and_decode(bytes: &[u8]) -> Result<String, PairParseError> {
    if bytes.is_empty() {
        return Ok(String::new());
    }

    let encoding = guess_encoding(bytes);
    decode_as(encoding, bytes)
}

fn guess_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn decode_as(encoding: &'static Encoding, bytes: &[u8]) -> Result<String, PairParseError> {
    let (text, used_encoding, had_errors) = encoding.decode(bytes);

    if had_errors {
        return Err(PairParseError::Decode(format!(
            "content is not valid {}",
            used_encoding.name()
        )));
    }

    tracing::debug!(
        encoding = used_encoding.name(),
        byte_count = bytes.len(),
        "Decoded uploaded text"
    );

    Ok(text.into_owned())
}

pub mod decoder;
pub mod encoder;

use crate::domain::audio::AudioSegment;

pub use decoder::decode_to_segment;
pub use encoder::encode_mp3;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("decode: {0}")]
    Decode(String),
    #[error("encode: {0}")]
    Encode(String),
}

/// Decodes synthesized clips and encodes the assembled stream.
///
/// Every decoded segment comes out mono at `sample_rate()`, so segments from
/// different providers can be appended directly.
pub trait AudioCodec: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<AudioSegment, AudioError>;

    fn encode(&self, segment: &AudioSegment) -> Result<Vec<u8>, AudioError>;

    fn sample_rate(&self) -> u32;

    /// Short name of the encoded output format, e.g. "mp3"
    fn format(&self) -> &'static str;
}

/// Symphonia for decoding, LAME for encoding
pub struct Mp3Codec {
    sample_rate: u32,
}

impl Mp3Codec {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }
}

impl AudioCodec for Mp3Codec {
    fn decode(&self, data: &[u8]) -> Result<AudioSegment, AudioError> {
        decode_to_segment(data, self.sample_rate)
    }

    fn encode(&self, segment: &AudioSegment) -> Result<Vec<u8>, AudioError> {
        encode_mp3(segment)
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn format(&self) -> &'static str {
        "mp3"
    }
}

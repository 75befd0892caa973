use mp3lame_encoder::{Bitrate, Builder, FlushNoGap, MonoPcm, Quality};

use super::AudioError;
use crate::domain::audio::AudioSegment;

/// PCM frames handed to LAME per call
const ENCODE_CHUNK: usize = 1152 * 32;

/// Encode a mono segment to a constant bitrate MP3 stream.
///
/// An empty segment encodes to an empty buffer.
pub fn encode_mp3(segment: &AudioSegment) -> Result<Vec<u8>, AudioError> {
    if segment.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = Builder::new()
        .ok_or_else(|| AudioError::Encode("failed to allocate LAME encoder".to_string()))?;
    builder
        .set_num_channels(1)
        .map_err(|e| AudioError::Encode(format!("channels: {:?}", e)))?;
    builder
        .set_sample_rate(segment.sample_rate())
        .map_err(|e| AudioError::Encode(format!("sample rate: {:?}", e)))?;
    builder
        .set_brate(Bitrate::Kbps64)
        .map_err(|e| AudioError::Encode(format!("bitrate: {:?}", e)))?;
    builder
        .set_quality(Quality::Good)
        .map_err(|e| AudioError::Encode(format!("quality: {:?}", e)))?;

    let mut encoder = builder
        .build()
        .map_err(|e| AudioError::Encode(format!("init: {:?}", e)))?;

    let pcm: Vec<i16> = segment
        .samples()
        .iter()
        .map(|s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect();

    let mut output = Vec::with_capacity(mp3lame_encoder::max_required_buffer_size(pcm.len()));

    for chunk in pcm.chunks(ENCODE_CHUNK) {
        encoder
            .encode_to_vec(MonoPcm(chunk), &mut output)
            .map_err(|e| AudioError::Encode(format!("frame: {:?}", e)))?;
    }

    encoder
        .flush_to_vec::<FlushNoGap>(&mut output)
        .map_err(|e| AudioError::Encode(format!("flush: {:?}", e)))?;

    tracing::debug!(
        samples = pcm.len(),
        sample_rate = segment.sample_rate(),
        mp3_bytes = output.len(),
        "Segment encoded to MP3"
    );

    Ok(output)
}

use std::time::Duration;

/// Decoded mono audio held in memory while a bulk request is assembled
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioSegment {
    pub fn empty(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples: Vec::new(),
        }
    }

    pub fn from_samples(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    /// Silence of the given length, rounded down to whole samples
    pub fn silent(duration: Duration, sample_rate: u32) -> Self {
        let sample_count =
            (duration.as_nanos() * sample_rate as u128 / 1_000_000_000) as usize;
        Self {
            sample_rate,
            samples: vec![0.0; sample_count],
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        let nanos = self.samples.len() as u128 * 1_000_000_000 / self.sample_rate as u128;
        Duration::from_nanos(nanos as u64)
    }

    /// Append another segment. Both must share a sample rate; the codec
    /// decodes every clip to the output rate before it gets here.
    pub fn append(&mut self, other: &AudioSegment) {
        debug_assert_eq!(
            self.sample_rate, other.sample_rate,
            "segments must share a sample rate"
        );
        self.samples.extend_from_slice(&other.samples);
    }
}

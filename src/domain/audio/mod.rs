pub mod segment;

pub use segment::AudioSegment;

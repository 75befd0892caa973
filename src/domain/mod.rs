pub mod audio;
pub mod pairs;
pub mod tts;

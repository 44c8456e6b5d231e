//! Error types for voxbridge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxbridgeError {
    // Expected, non-exceptional outcomes
    #[error("no speech detected within {seconds}s")]
    CaptureTimeout { seconds: u64 },

    #[error("could not understand the audio")]
    UnintelligibleAudio,

    // Audio capture errors
    #[error("audio device error: {message}")]
    Device { message: String },

    // Remote service errors
    #[error("recognition service error: {message}")]
    RecognitionService { message: String },

    #[error("translation service error: {message}")]
    TranslationService { message: String },

    // Persistence errors
    #[error("storage error: {0}")]
    Storage(#[from] mongodb::error::Error),

    #[error("local file error: {0}")]
    LocalFile(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    // Startup errors
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, VoxbridgeError>;

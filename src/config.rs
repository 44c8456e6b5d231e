use crate::error::{Result, VoxbridgeError};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub capture: CaptureConfig,
    pub recognition: RecognitionConfig,
    pub translation: TranslationConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Seconds to wait for speech to start before giving up
    pub timeout_secs: u64,
    /// Ambient-noise calibration listen window
    pub calibration_ms: u64,
    /// Trailing silence that ends the phrase
    pub silence_hold_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionConfig {
    /// Base URL of the recognition service (e.g., "http://127.0.0.1:6006")
    pub service_url: String,
    /// BCP-47-like language hint passed to the service (e.g., "hi-IN")
    pub language_hint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// Base URL of the translation service
    pub service_url: String,
    /// Target language tag (e.g., "en")
    pub target_language: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// MongoDB connection string. Treated as a secret: leave empty in the
    /// config file and supply VOXBRIDGE__STORAGE__URI via the environment.
    #[serde(default)]
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Local directory receiving the timestamped .wav and .txt copies
    pub output_dir: String,
    /// Whether to store the audio blob when no transcript was produced
    #[serde(default = "default_store_orphan_audio")]
    pub store_orphan_audio: bool,
}

fn default_store_orphan_audio() -> bool {
    true
}

impl Config {
    /// Load configuration from a file plus VOXBRIDGE__* environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("VOXBRIDGE").separator("__"))
            .build()?;

        let cfg: Config = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.uri.trim().is_empty() {
            return Err(VoxbridgeError::ConfigInvalidValue {
                key: "storage.uri".to_string(),
                message: "connection string is required (set VOXBRIDGE__STORAGE__URI)"
                    .to_string(),
            });
        }
        if self.capture.timeout_secs == 0 {
            return Err(VoxbridgeError::ConfigInvalidValue {
                key: "capture.timeout_secs".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.recognition.service_url.trim().is_empty() {
            return Err(VoxbridgeError::ConfigInvalidValue {
                key: "recognition.service_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.translation.service_url.trim().is_empty() {
            return Err(VoxbridgeError::ConfigInvalidValue {
                key: "translation.service_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

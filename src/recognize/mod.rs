//! Remote speech recognition client
//!
//! Thin pass-through to an external recognition service: audio in, text out.
//! No local model, no caching, no post-processing.

pub mod client;
pub mod types;

pub use client::HttpRecognizer;
pub use types::{RecognizeRequest, RecognizeResponse, Transcription};

use crate::audio::AudioClip;
use crate::error::Result;

/// External speech-to-text collaborator
#[async_trait::async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Submit a clip with a language hint; fails with `UnintelligibleAudio`
    /// when the service could not derive any text
    async fn transcribe(&self, clip: &AudioClip, language_hint: &str) -> Result<Transcription>;
}

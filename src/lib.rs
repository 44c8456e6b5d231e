pub mod audio;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod recognize;
pub mod store;
pub mod translate;

pub use audio::{AudioCapture, AudioClip, CaptureSettings, MicrophoneCapture};
pub use config::Config;
pub use error::{Result, VoxbridgeError};
pub use pipeline::{CycleOutcome, Pipeline, PipelineOptions};
pub use recognize::{HttpRecognizer, SpeechRecognizer, Transcription};
pub use store::{AudioBlobId, LocalSink, MongoStore, TranscriptRecord, TranscriptStore};
pub use translate::{HttpTranslator, Translation, Translator};

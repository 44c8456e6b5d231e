pub mod capture;
pub mod clip;

pub use capture::{AudioCapture, CaptureSettings, MicrophoneCapture};
pub use clip::AudioClip;

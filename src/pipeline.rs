//! One-shot capture → transcribe → translate → persist pipeline
//!
//! Strictly sequential, single pass: the process performs one cycle and
//! exits. Silence and unintelligible audio end the cycle quietly; remote
//! service failures abort it without inserting a record.

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::audio::{AudioCapture, AudioClip};
use crate::error::{Result, VoxbridgeError};
use crate::recognize::{SpeechRecognizer, Transcription};
use crate::store::{AudioBlobId, LocalSink, TranscriptRecord, TranscriptStore};
use crate::translate::Translator;

/// Per-cycle options, resolved from config and CLI flags
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// How long to wait for speech to start
    pub capture_timeout: Duration,
    /// Language hint passed to the recognition service (e.g., "hi-IN")
    pub language_hint: String,
    /// Target language for translation (e.g., "en")
    pub target_language: String,
    /// Whether to store the audio blob when no transcript was produced
    pub store_orphan_audio: bool,
}

/// How a cycle ended
#[derive(Debug)]
pub enum CycleOutcome {
    /// Record inserted, audio blob attached
    Completed {
        record_id: String,
        audio_blob: AudioBlobId,
    },
    /// No speech started before the capture timeout
    NoSpeech,
    /// Audio was captured but yielded no usable text
    NoText,
}

pub struct Pipeline {
    capture: Box<dyn AudioCapture>,
    recognizer: Box<dyn SpeechRecognizer>,
    translator: Box<dyn Translator>,
    store: Box<dyn TranscriptStore>,
    local: LocalSink,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(
        capture: Box<dyn AudioCapture>,
        recognizer: Box<dyn SpeechRecognizer>,
        translator: Box<dyn Translator>,
        store: Box<dyn TranscriptStore>,
        local: LocalSink,
        options: PipelineOptions,
    ) -> Self {
        Self {
            capture,
            recognizer,
            translator,
            store,
            local,
            options,
        }
    }

    /// Run one capture-translate-store cycle.
    ///
    /// `Ok` covers every expected ending, including silence. `Err` means a
    /// device, service, or storage failure; no transcript record exists in
    /// the store when this returns an error.
    pub async fn run_cycle(&self) -> Result<CycleOutcome> {
        info!(
            "Speak now... you have {}s to start",
            self.options.capture_timeout.as_secs()
        );

        let clip = match self.capture.capture(self.options.capture_timeout).await {
            Ok(clip) => clip,
            Err(VoxbridgeError::CaptureTimeout { seconds }) => {
                info!("Listening timed out after {}s: no speech detected", seconds);
                return Ok(CycleOutcome::NoSpeech);
            }
            Err(e) => return Err(e),
        };

        let stamp = clip.stamp();

        // Local debug copy of the audio, regardless of what the transcript
        // turns out to be
        if let Err(e) = self.local.write_wav(&clip, &stamp) {
            warn!("Failed to write local audio copy: {}", e);
        }

        let transcription = match self
            .recognizer
            .transcribe(&clip, &self.options.language_hint)
            .await
        {
            Ok(t) if t.text.trim().is_empty() => None,
            Ok(t) => Some(t),
            Err(VoxbridgeError::UnintelligibleAudio) => None,
            Err(e) => {
                self.store_orphan_audio(&clip, &stamp).await;
                return Err(e);
            }
        };

        let Some(Transcription { text, language }) = transcription else {
            info!("No valid text to translate");
            self.store_orphan_audio(&clip, &stamp).await;
            return Ok(CycleOutcome::NoText);
        };

        let translation = match self
            .translator
            .translate(&text, &self.options.target_language)
            .await
        {
            Ok(t) => t,
            Err(e) => {
                self.store_orphan_audio(&clip, &stamp).await;
                return Err(e);
            }
        };

        // Blob first, then a single insert of the fully populated record, so
        // a stored record is never missing its audio link
        let wav = clip.wav_bytes()?;
        let filename = format!("capture_{}.wav", stamp);
        let audio_blob = self.store.store_audio(&wav, &filename).await?;

        let record = TranscriptRecord::new(
            text.clone(),
            translation.text.clone(),
            translation.detected_source.or(language),
            translation.target_language,
            clip.captured_at,
            Some(audio_blob.clone()),
        );
        let record_id = self.store.insert_record(record).await?;

        if let Err(e) = self.local.write_transcript(&stamp, &text, &translation.text) {
            warn!("Failed to write local transcript: {}", e);
        }

        Ok(CycleOutcome::Completed {
            record_id,
            audio_blob,
        })
    }

    /// Store the audio blob for a cycle that produced no record, when the
    /// policy allows it (the blob then has no record pointing at it)
    async fn store_orphan_audio(&self, clip: &AudioClip, stamp: &str) {
        if !self.options.store_orphan_audio {
            debug!("Skipping orphan audio blob (disabled by config)");
            return;
        }

        let wav = match clip.wav_bytes() {
            Ok(wav) => wav,
            Err(e) => {
                warn!("Failed to encode orphan audio: {}", e);
                return;
            }
        };

        let filename = format!("capture_{}.wav", stamp);
        match self.store.store_audio(&wav, &filename).await {
            Ok(id) => info!("Orphan audio blob stored: {}", id),
            Err(e) => warn!("Failed to store orphan audio blob: {}", e),
        }
    }
}

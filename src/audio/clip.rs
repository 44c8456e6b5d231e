use crate::error::Result;
use chrono::{DateTime, Utc};
use std::io::Cursor;

/// One captured speech sample (16-bit PCM, interleaved)
#[derive(Debug, Clone)]
pub struct AudioClip {
    /// Raw audio samples (i16 PCM)
    pub samples: Vec<i16>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// When the capture started
    pub captured_at: DateTime<Utc>,
}

impl AudioClip {
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    /// Timestamp stamp used for local filenames and the blob filename
    pub fn stamp(&self) -> String {
        self.captured_at.format("%Y-%m-%d_%H-%M-%S").to_string()
    }

    /// Encode the clip as an in-memory WAV file
    pub fn wav_bytes(&self) -> Result<Vec<u8>> {
        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
            for &sample in &self.samples {
                writer.write_sample(sample)?;
            }
            writer.finalize()?;
        }

        Ok(cursor.into_inner())
    }
}

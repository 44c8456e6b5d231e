use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::audio::AudioClip;
use crate::error::Result;

/// Local plain-text and WAV copies, independent of the document store
///
/// Best-effort: callers log and continue when these writes fail.
pub struct LocalSink {
    output_dir: PathBuf,
}

impl LocalSink {
    /// Create the output directory if it doesn't exist
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;

        Ok(Self { output_dir })
    }

    /// Write the captured audio as a timestamped debug WAV copy
    pub fn write_wav(&self, clip: &AudioClip, stamp: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("capture_{}.wav", stamp));

        let spec = hound::WavSpec {
            channels: clip.channels,
            sample_rate: clip.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(&path, spec)?;
        for &sample in &clip.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;

        info!("Audio saved to {}", path.display());

        Ok(path)
    }

    /// Write the two-line transcript file (recognized and translated text)
    pub fn write_transcript(
        &self,
        stamp: &str,
        recognized: &str,
        translated: &str,
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("transcript_{}.txt", stamp));

        let mut file = fs::File::create(&path)?;
        writeln!(file, "Recognized text: {}", recognized)?;
        writeln!(file, "Translated text: {}", translated)?;

        info!("Transcript saved to {}", path.display());

        Ok(path)
    }
}

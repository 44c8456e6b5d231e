use crate::audio::clip::AudioClip;
use crate::error::{Result, VoxbridgeError};
use chrono::Utc;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Minimum energy threshold, so dead-quiet rooms don't trigger on noise floor
const ENERGY_FLOOR: f32 = 0.01;
/// Speech must exceed ambient RMS by this factor
const AMBIENT_FACTOR: f32 = 1.5;
/// Audio retained from just before speech onset
const PRE_ROLL_MS: u64 = 300;

/// Capture tuning knobs (see `CaptureConfig` for the file-level settings)
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    /// Ambient-noise calibration listen window
    pub calibration_ms: u64,
    /// Trailing silence that ends the phrase
    pub silence_hold_ms: u64,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            calibration_ms: 500,
            silence_hold_ms: 800,
        }
    }
}

/// Bounded-duration speech capture from an input device
#[async_trait::async_trait]
pub trait AudioCapture: Send + Sync {
    /// Listen until speech ends, or fail with `CaptureTimeout` if no speech
    /// starts within `timeout`
    async fn capture(&self, timeout: Duration) -> Result<AudioClip>;
}

/// Default-microphone capture via cpal
pub struct MicrophoneCapture {
    settings: CaptureSettings,
}

impl MicrophoneCapture {
    /// Fails if no default input device is present, so a missing microphone
    /// surfaces at startup rather than mid-cycle.
    pub fn new(settings: CaptureSettings) -> Result<Self> {
        let host = cpal::default_host();
        host.default_input_device()
            .ok_or_else(|| VoxbridgeError::Device {
                message: "no default input device found".to_string(),
            })?;

        Ok(Self { settings })
    }
}

#[async_trait::async_trait]
impl AudioCapture for MicrophoneCapture {
    async fn capture(&self, timeout: Duration) -> Result<AudioClip> {
        let settings = self.settings.clone();

        // cpal streams are not Send; run the whole listen loop on a blocking
        // thread and hand back the finished clip
        tokio::task::spawn_blocking(move || capture_blocking(&settings, timeout))
            .await
            .map_err(|e| VoxbridgeError::Device {
                message: format!("capture task failed: {}", e),
            })?
    }
}

fn capture_blocking(settings: &CaptureSettings, timeout: Duration) -> Result<AudioClip> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| VoxbridgeError::Device {
            message: "no default input device found".to_string(),
        })?;

    let supported = device
        .default_input_config()
        .map_err(|e| VoxbridgeError::Device {
            message: format!("failed to query input config: {}", e),
        })?;

    let sample_rate = supported.sample_rate();
    let channels = supported.channels();
    let sample_format = supported.sample_format();
    let stream_config: cpal::StreamConfig = supported.into();

    debug!(
        "Opening input device: {}Hz, {} channels, {:?}",
        sample_rate, channels, sample_format
    );

    let (tx, rx) = mpsc::channel::<Vec<i16>>();
    let err_msg = "input stream error";

    let stream = match sample_format {
        cpal::SampleFormat::I16 => device.build_input_stream(
            &stream_config,
            move |data: &[i16], _| {
                let _ = tx.send(data.to_vec());
            },
            move |e| debug!("{}: {}", err_msg, e),
            None,
        ),
        cpal::SampleFormat::F32 => device.build_input_stream(
            &stream_config,
            move |data: &[f32], _| {
                let converted: Vec<i16> = data
                    .iter()
                    .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
                    .collect();
                let _ = tx.send(converted);
            },
            move |e| debug!("{}: {}", err_msg, e),
            None,
        ),
        other => {
            return Err(VoxbridgeError::Device {
                message: format!("unsupported input sample format: {:?}", other),
            })
        }
    }
    .map_err(|e| VoxbridgeError::Device {
        message: format!("failed to open input stream: {}", e),
    })?;

    stream.play().map_err(|e| VoxbridgeError::Device {
        message: format!("failed to start input stream: {}", e),
    })?;

    let captured_at = Utc::now();

    // Phase 1: ambient-noise calibration sets the energy threshold
    let calibration = Duration::from_millis(settings.calibration_ms);
    let mut ambient = Vec::new();
    let calibration_start = Instant::now();
    while calibration_start.elapsed() < calibration {
        if let Ok(chunk) = rx.recv_timeout(calibration) {
            ambient.extend(downmix(&chunk, channels));
        }
    }
    let threshold = derive_threshold(rms(&ambient));
    info!(
        "Calibrated for ambient noise: threshold {:.4} ({} samples)",
        threshold,
        ambient.len()
    );

    // Phase 2: wait for speech to start, keeping a short pre-roll
    let pre_roll_samples = (sample_rate as u64 * PRE_ROLL_MS / 1000) as usize;
    let mut pre_roll: Vec<i16> = Vec::new();
    let wait_start = Instant::now();
    let mut samples: Vec<i16>;
    loop {
        if wait_start.elapsed() >= timeout {
            return Err(VoxbridgeError::CaptureTimeout {
                seconds: timeout.as_secs(),
            });
        }

        let chunk = match rx.recv_timeout(timeout.saturating_sub(wait_start.elapsed())) {
            Ok(chunk) => downmix(&chunk, channels),
            Err(mpsc::RecvTimeoutError::Timeout) => {
                return Err(VoxbridgeError::CaptureTimeout {
                    seconds: timeout.as_secs(),
                })
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err(VoxbridgeError::Device {
                    message: "input stream closed unexpectedly".to_string(),
                })
            }
        };

        if rms(&chunk) > threshold {
            samples = pre_roll;
            samples.extend(&chunk);
            break;
        }

        pre_roll.extend(&chunk);
        if pre_roll.len() > pre_roll_samples {
            let excess = pre_roll.len() - pre_roll_samples;
            pre_roll.drain(..excess);
        }
    }

    info!("Speech detected, recording...");

    // Phase 3: record until the trailing silence hold elapses
    let silence_hold = Duration::from_millis(settings.silence_hold_ms);
    let mut last_voice = Instant::now();
    loop {
        match rx.recv_timeout(silence_hold) {
            Ok(chunk) => {
                let chunk = downmix(&chunk, channels);
                if rms(&chunk) > threshold {
                    last_voice = Instant::now();
                }
                samples.extend(&chunk);
                if last_voice.elapsed() >= silence_hold {
                    break;
                }
            }
            Err(_) => break,
        }
    }

    drop(stream);

    let clip = AudioClip {
        samples,
        sample_rate,
        channels: 1,
        captured_at,
    };
    info!("Captured {:.1}s of audio", clip.duration_seconds());

    Ok(clip)
}

/// Root-mean-square level of normalized samples, in [0, 1]
fn rms(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples
        .iter()
        .map(|&s| {
            let normalized = s as f32 / i16::MAX as f32;
            normalized * normalized
        })
        .sum();
    (sum_sq / samples.len() as f32).sqrt()
}

fn derive_threshold(ambient_rms: f32) -> f32 {
    (ambient_rms * AMBIENT_FACTOR).max(ENERGY_FLOOR)
}

/// Sum interleaved channels into mono (clamped, matching WAV conventions)
fn downmix(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let channels = channels as usize;
    samples
        .chunks_exact(channels)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            sum.clamp(i16::MIN as i32, i16::MAX as i32) as i16
        })
        .collect()
}

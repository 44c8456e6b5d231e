use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::types::{RecognizeRequest, RecognizeResponse, Transcription};
use super::SpeechRecognizer;
use crate::audio::AudioClip;
use crate::error::{Result, VoxbridgeError};

/// HTTP client for the recognition service
pub struct HttpRecognizer {
    client: Client,
    service_url: String,
}

impl HttpRecognizer {
    /// # Arguments
    /// * `service_url` - Base URL of the service (e.g., "http://127.0.0.1:6006")
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(service_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| VoxbridgeError::RecognitionService {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            service_url,
        })
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for HttpRecognizer {
    async fn transcribe(&self, clip: &AudioClip, language_hint: &str) -> Result<Transcription> {
        let wav = clip.wav_bytes()?;
        let request = RecognizeRequest {
            audio_b64: BASE64.encode(&wav),
            sample_rate: clip.sample_rate,
            channels: clip.channels,
            language: language_hint.to_string(),
        };

        let url = format!("{}/v1/transcribe", self.service_url);
        info!(
            "Sending {} bytes of audio to recognition service ({})",
            wav.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| VoxbridgeError::RecognitionService {
                message: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(VoxbridgeError::RecognitionService {
                message: format!("service returned {}: {}", status, detail),
            });
        }

        let body: RecognizeResponse =
            response
                .json()
                .await
                .map_err(|e| VoxbridgeError::RecognitionService {
                    message: format!("failed to parse response: {}", e),
                })?;

        // The service answered but found no speech in the audio
        if body.text.trim().is_empty() {
            return Err(VoxbridgeError::UnintelligibleAudio);
        }

        info!(
            "Recognized text ({}): {}",
            body.language.as_deref().unwrap_or("unknown"),
            body.text
        );

        Ok(Transcription {
            text: body.text,
            language: body.language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizer_creation() {
        let recognizer = HttpRecognizer::new("http://127.0.0.1:6006".to_string(), 30).unwrap();
        assert_eq!(recognizer.service_url, "http://127.0.0.1:6006");
    }
}

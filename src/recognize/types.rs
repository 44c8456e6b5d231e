use serde::{Deserialize, Serialize};

/// Request to the recognition service
#[derive(Debug, Clone, Serialize)]
pub struct RecognizeRequest {
    /// Base64 encoded audio (WAV)
    pub audio_b64: String,
    /// Sample rate of the encoded audio in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Language hint (e.g., "hi-IN")
    pub language: String,
}

/// Response from the recognition service
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeResponse {
    /// Recognized text, verbatim from the service
    pub text: String,
    /// Language the service reports for the audio
    pub language: Option<String>,
    /// Audio duration in seconds
    #[serde(default)]
    pub duration: f32,
}

/// Recognized text plus the language the service reported
#[derive(Debug, Clone)]
pub struct Transcription {
    pub text: String,
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_fields() {
        let request = RecognizeRequest {
            audio_b64: "UklGRg==".to_string(),
            sample_rate: 16000,
            channels: 1,
            language: "hi-IN".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["audio_b64"], "UklGRg==");
        assert_eq!(json["sample_rate"], 16000);
        assert_eq!(json["language"], "hi-IN");
    }

    #[test]
    fn test_response_parses_without_duration() {
        let response: RecognizeResponse =
            serde_json::from_str(r#"{"text": "नमस्ते", "language": "hi"}"#).unwrap();
        assert_eq!(response.text, "नमस्ते");
        assert_eq!(response.language.as_deref(), Some("hi"));
        assert_eq!(response.duration, 0.0);
    }
}

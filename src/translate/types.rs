use serde::{Deserialize, Serialize};

/// Request to the translation service
#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Target language tag (e.g., "en")
    pub target_lang: String,
}

/// Response from the translation service
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub ok: bool,
    pub text: Option<String>,
    /// Source language the service detected
    pub detected_source_lang: Option<String>,
    pub error: Option<String>,
}

/// Translated text plus language tags
#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub detected_source: Option<String>,
    pub target_language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_target_lang() {
        let request = TranslateRequest {
            text: "नमस्ते".to_string(),
            target_lang: "en".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "नमस्ते");
        assert_eq!(json["target_lang"], "en");
    }

    #[test]
    fn test_response_parses_success() {
        let response: TranslateResponse = serde_json::from_str(
            r#"{"ok": true, "text": "Hello", "detected_source_lang": "hi", "error": null}"#,
        )
        .unwrap();
        assert!(response.ok);
        assert_eq!(response.text.as_deref(), Some("Hello"));
        assert_eq!(response.detected_source_lang.as_deref(), Some("hi"));
    }

    #[test]
    fn test_response_parses_error() {
        let response: TranslateResponse =
            serde_json::from_str(r#"{"ok": false, "error": "model not loaded"}"#).unwrap();
        assert!(!response.ok);
        assert!(response.text.is_none());
        assert_eq!(response.error.as_deref(), Some("model not loaded"));
    }
}

use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::types::{TranslateRequest, TranslateResponse, Translation};
use super::Translator;
use crate::error::{Result, VoxbridgeError};

/// HTTP client for the translation service
pub struct HttpTranslator {
    client: Client,
    service_url: String,
}

impl HttpTranslator {
    pub fn new(service_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| VoxbridgeError::TranslationService {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            service_url,
        })
    }
}

#[async_trait::async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<Translation> {
        let request = TranslateRequest {
            text: text.to_string(),
            target_lang: target_language.to_string(),
        };

        let url = format!("{}/v1/translate", self.service_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| VoxbridgeError::TranslationService {
                message: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(VoxbridgeError::TranslationService {
                message: format!("service returned {}: {}", status, detail),
            });
        }

        let body: TranslateResponse =
            response
                .json()
                .await
                .map_err(|e| VoxbridgeError::TranslationService {
                    message: format!("failed to parse response: {}", e),
                })?;

        if !body.ok {
            return Err(VoxbridgeError::TranslationService {
                message: body.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let translated = body.text.ok_or_else(|| VoxbridgeError::TranslationService {
            message: "no translation text in response".to_string(),
        })?;

        info!(
            "Translated text ({} -> {}): {}",
            body.detected_source_lang.as_deref().unwrap_or("auto"),
            target_language,
            translated
        );

        Ok(Translation {
            text: translated,
            detected_source: body.detected_source_lang,
            target_language: target_language.to_string(),
        })
    }
}

//! Remote translation client
//!
//! Source language is auto-detected by the service; no retries, no chunking,
//! no glossary control.

pub mod client;
pub mod types;

pub use client::HttpTranslator;
pub use types::{TranslateRequest, TranslateResponse, Translation};

use crate::error::Result;

/// External text translation collaborator
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<Translation>;
}

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a stored audio blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioBlobId(pub Bson);

impl fmt::Display for AudioBlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted transcript document: one per successful cycle, never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub recognized_text: String,
    pub translated_text: String,
    /// Source language as detected by the translation service, falling back
    /// to what the recognition service reported
    pub source_language: Option<String>,
    pub target_language: String,
    pub timestamp: mongodb::bson::DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_blob_id: Option<Bson>,
}

impl TranscriptRecord {
    pub fn new(
        recognized_text: String,
        translated_text: String,
        source_language: Option<String>,
        target_language: String,
        timestamp: chrono::DateTime<chrono::Utc>,
        audio_blob_id: Option<AudioBlobId>,
    ) -> Self {
        Self {
            recognized_text,
            translated_text,
            source_language,
            target_language,
            timestamp: mongodb::bson::DateTime::from_chrono(timestamp),
            audio_blob_id: audio_blob_id.map(|id| id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_record_serializes_with_blob_id() {
        let oid = ObjectId::new();
        let record = TranscriptRecord::new(
            "नमस्ते".to_string(),
            "Hello".to_string(),
            Some("hi".to_string()),
            "en".to_string(),
            chrono::Utc::now(),
            Some(AudioBlobId(Bson::ObjectId(oid))),
        );

        let doc = mongodb::bson::to_document(&record).unwrap();
        assert_eq!(doc.get_str("recognized_text").unwrap(), "नमस्ते");
        assert_eq!(doc.get_str("translated_text").unwrap(), "Hello");
        assert_eq!(doc.get_object_id("audio_blob_id").unwrap(), oid);
    }

    #[test]
    fn test_record_omits_missing_blob_id() {
        let record = TranscriptRecord::new(
            "a".to_string(),
            "b".to_string(),
            None,
            "en".to_string(),
            chrono::Utc::now(),
            None,
        );

        let doc = mongodb::bson::to_document(&record).unwrap();
        assert!(!doc.contains_key("audio_blob_id"));
    }
}

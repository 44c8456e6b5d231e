//! Durable persistence for transcripts and audio
//!
//! Two sinks: a MongoDB document collection plus GridFS bucket for the
//! durable records, and a local directory receiving best-effort debug copies.

pub mod local;
pub mod mongo;
pub mod record;

pub use local::LocalSink;
pub use mongo::MongoStore;
pub use record::{AudioBlobId, TranscriptRecord};

use crate::error::Result;

/// Durable record/blob store
///
/// The audio blob is always written before the record so a stored record is
/// never missing its audio link.
#[async_trait::async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Store raw WAV bytes; returns the blob id to attach to the record
    async fn store_audio(&self, wav_bytes: &[u8], filename: &str) -> Result<AudioBlobId>;

    /// Insert one fully populated record; returns its id for logging
    async fn insert_record(&self, record: TranscriptRecord) -> Result<String>;
}

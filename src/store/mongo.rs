use futures::io::AsyncWriteExt;
use mongodb::bson::doc;
use mongodb::gridfs::GridFsBucket;
use mongodb::{Client, Collection};
use tracing::info;

use super::record::{AudioBlobId, TranscriptRecord};
use super::TranscriptStore;
use crate::error::Result;

/// MongoDB-backed transcript store: one typed collection for records plus a
/// GridFS bucket for audio blobs
pub struct MongoStore {
    collection: Collection<TranscriptRecord>,
    bucket: GridFsBucket,
}

impl MongoStore {
    /// Connect and ping the server, failing fast if the store is unreachable
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        info!("Connecting to document store");

        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);

        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to document store: database {}", database);

        Ok(Self {
            collection: db.collection(collection),
            bucket: db.gridfs_bucket(None),
        })
    }
}

#[async_trait::async_trait]
impl TranscriptStore for MongoStore {
    async fn store_audio(&self, wav_bytes: &[u8], filename: &str) -> Result<AudioBlobId> {
        let mut upload = self.bucket.open_upload_stream(filename).await?;
        let id = upload.id().clone();

        // GridFS stream errors surface as io::Error; fold them into Storage
        upload
            .write_all(wav_bytes)
            .await
            .map_err(|e| crate::error::VoxbridgeError::Storage(e.into()))?;
        upload
            .close()
            .await
            .map_err(|e| crate::error::VoxbridgeError::Storage(e.into()))?;

        info!(
            "Audio blob stored: {} ({} bytes, id {})",
            filename,
            wav_bytes.len(),
            id
        );

        Ok(AudioBlobId(id))
    }

    async fn insert_record(&self, record: TranscriptRecord) -> Result<String> {
        let result = self.collection.insert_one(record).await?;
        let id = result.inserted_id.to_string();

        info!("Transcript record saved to store: {}", id);

        Ok(id)
    }
}

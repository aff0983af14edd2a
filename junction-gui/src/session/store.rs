use std::io::SeekFrom;
use std::path::PathBuf;

use async_fd_lock::LockWrite;
use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncSeekExt;
use tokio::io::AsyncWriteExt;

use crate::dir::JunctionDirectory;

use super::{SessionError, SessionRecord, SessionStore};

pub const SESSION_FILENAME: &str = "session.json";

/// Stores the session as a JSON file in the data directory. A write lock is
/// taken while writing so concurrent processes do not interleave.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(datadir: &JunctionDirectory) -> Self {
        let mut path = datadir.path().to_path_buf();
        path.push(SESSION_FILENAME);
        Self { path }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let content = serde_json::to_vec_pretty(record)
            .map_err(|e| SessionError::WritingFile(format!("Failed to serialize session: {}", e)))?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .await
            .map_err(|e| SessionError::WritingFile(format!("Opening file: {}", e)))?
            .lock_write()
            .await
            .map_err(|e| SessionError::WritingFile(format!("Locking file: {:?}", e)))?;

        file.seek(SeekFrom::Start(0))
            .await
            .map_err(|e| SessionError::WritingFile(format!("Seeking to start of file: {}", e)))?;

        file.write_all(&content).await.map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            SessionError::WritingFile(e.to_string())
        })?;

        file.inner_mut()
            .set_len(content.len() as u64)
            .await
            .map_err(|e| SessionError::WritingFile(format!("Truncating file: {}", e)))?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionRecord>, SessionError> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::ReadingFile(format!(
                    "Reading session file: {}",
                    e
                )))
            }
        };

        match serde_json::from_slice::<SessionRecord>(&content) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                // A malformed session file is dropped, the user simply logs
                // in again.
                tracing::warn!("Something wrong with the session file: {:?}", e);
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::WritingFile(format!(
                "Removing session file: {}",
                e
            ))),
        }
    }
}

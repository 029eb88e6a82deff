//! Flat-File Store
//!
//! Reads and writes the whole item collection as one JSON array in a single
//! backing file.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;
use crate::models::Item;

// == File Store ==
/// The item collection's only persistence: a single JSON file, read and
/// rewritten wholesale.
///
/// There is no locking around the file; concurrent readers and writers may
/// observe either side of a write, and concurrent writers race (last write
/// wins). That trade-off is accepted for this single-process, small-dataset
/// design.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    // == Constructor ==
    /// Creates a store over the given backing file path. The file is not
    /// touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Read All ==
    /// Reads and parses the entire backing file.
    ///
    /// A missing or unreadable file surfaces as an I/O error, malformed
    /// content as a parse error; there is no partial-read recovery.
    pub async fn read_all(&self) -> Result<Vec<Item>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let items = serde_json::from_str(&raw)?;
        Ok(items)
    }

    // == Write All ==
    /// Serializes the collection (pretty-printed) and overwrites the
    /// backing file. Last write wins; the caller is responsible for
    /// invalidating any derived caches afterwards.
    pub async fn write_all(&self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    // == Modified ==
    /// The backing file's last-modification time, used to validate the
    /// stats snapshot cache.
    pub async fn modified(&self) -> Result<SystemTime> {
        let metadata = tokio::fs::metadata(&self.path).await?;
        Ok(metadata.modified()?)
    }
}

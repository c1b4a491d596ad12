//! Persisted state for the daily verse batch.
//!
//! The store keeps exactly one entry: the calendar-day key and the verse
//! list for that day, written together. A reader must never accept a
//! date-only or verses-only state; partial state reads as absent.
//!
//! # Layout (filesystem store)
//!
//! ```text
//! <cache dir>/ayat/daily/
//!   date           # calendar-day string, e.g. 2026-08-07
//!   verses.json    # serialized VerseRecord list
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{CacheError, CacheResult};
use crate::model::VerseRecord;

const DATE_FILE: &str = "date";
const VERSES_FILE: &str = "verses.json";

/// The persisted cache entry: one day's verse batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBatch {
    /// Calendar-day key the batch was fetched on.
    pub date: String,

    /// Ordered verse records for that day.
    pub verses: Vec<VerseRecord>,
}

/// Storage backend for the daily batch.
#[async_trait]
pub trait DailyStore: Send + Sync {
    /// Load the stored batch. Partial or unreadable state is `Ok(None)`.
    async fn load(&self) -> CacheResult<Option<DailyBatch>>;

    /// Replace the stored batch as a whole.
    async fn save(&self, batch: &DailyBatch) -> CacheResult<()>;
}

/// Filesystem-backed store holding the two entry files.
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Create a store at the default location.
    ///
    /// Default: `<platform cache dir>/ayat/daily`
    pub fn new() -> CacheResult<Self> {
        let base = dirs::cache_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| CacheError::Store {
                message: "could not determine cache directory".to_string(),
            })?;

        Ok(Self {
            dir: base.join("ayat").join("daily"),
        })
    }

    /// Create a store under a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn date_path(&self) -> PathBuf {
        self.dir.join(DATE_FILE)
    }

    fn verses_path(&self) -> PathBuf {
        self.dir.join(VERSES_FILE)
    }
}

#[async_trait]
impl DailyStore for FsStore {
    async fn load(&self) -> CacheResult<Option<DailyBatch>> {
        let date = match fs::read_to_string(self.date_path()).await {
            Ok(date) => date.trim().to_string(),
            Err(_) => {
                debug!("no stored date, batch absent");
                return Ok(None);
            }
        };

        let verses_raw = match fs::read_to_string(self.verses_path()).await {
            Ok(raw) => raw,
            Err(_) => {
                debug!("date present but verses missing, treating as absent");
                return Ok(None);
            }
        };

        match serde_json::from_str::<Vec<VerseRecord>>(&verses_raw) {
            Ok(verses) => Ok(Some(DailyBatch { date, verses })),
            Err(e) => {
                warn!(error = %e, "stored verses unreadable, treating as absent");
                Ok(None)
            }
        }
    }

    async fn save(&self, batch: &DailyBatch) -> CacheResult<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CacheError::Store {
                message: format!("failed to create store directory: {}", e),
            })?;

        let verses_json =
            serde_json::to_string(&batch.verses).map_err(|e| CacheError::Serialize {
                message: format!("failed to serialize verses: {}", e),
            })?;

        // Verses land before the date key; a crash in between leaves a
        // partial state that load() reads as absent.
        write_atomic(&self.verses_path(), &verses_json).await?;
        write_atomic(&self.date_path(), &batch.date).await?;

        debug!(date = %batch.date, verses = batch.verses.len(), "stored daily batch");
        Ok(())
    }
}

async fn write_atomic(path: &Path, content: &str) -> CacheResult<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content)
        .await
        .map_err(|e| CacheError::Store {
            message: format!("failed to write temp file: {}", e),
        })?;

    fs::rename(&temp_path, path)
        .await
        .map_err(|e| CacheError::Store {
            message: format!("failed to rename temp file: {}", e),
        })?;

    Ok(())
}

/// In-memory store for tests and hosts without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entry: tokio::sync::Mutex<Option<DailyBatch>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DailyStore for MemoryStore {
    async fn load(&self) -> CacheResult<Option<DailyBatch>> {
        Ok(self.entry.lock().await.clone())
    }

    async fn save(&self, batch: &DailyBatch) -> CacheResult<()> {
        *self.entry.lock().await = Some(batch.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN;
    use tempfile::tempdir;

    fn sample_batch(date: &str) -> DailyBatch {
        DailyBatch {
            date: date.to_string(),
            verses: vec![VerseRecord {
                id: 1,
                surah: "Al-Fatiha".to_string(),
                verse: "1".to_string(),
                text: "...".to_string(),
                translation: "All praise is due to Allah...".to_string(),
                tafsir: Some("Tafsir available on request".to_string()),
            }],
        }
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let tmp = tempdir().unwrap();
        let store = FsStore::with_dir(tmp.path());

        let batch = sample_batch("2026-08-07");
        store.save(&batch).await.unwrap();

        let loaded = store.load().await.unwrap().expect("expected stored batch");
        assert_eq!(loaded, batch);
    }

    #[tokio::test]
    async fn empty_store_loads_as_absent() {
        let tmp = tempdir().unwrap();
        let store = FsStore::with_dir(tmp.path().join("never-written"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn date_without_verses_is_absent() {
        let tmp = tempdir().unwrap();
        let store = FsStore::with_dir(tmp.path());

        store.save(&sample_batch("2026-08-07")).await.unwrap();
        tokio::fs::remove_file(store.verses_path()).await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn verses_without_date_is_absent() {
        let tmp = tempdir().unwrap();
        let store = FsStore::with_dir(tmp.path());

        store.save(&sample_batch("2026-08-07")).await.unwrap();
        tokio::fs::remove_file(store.date_path()).await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_verses_file_is_absent_not_an_error() {
        let tmp = tempdir().unwrap();
        let store = FsStore::with_dir(tmp.path());

        store.save(&sample_batch("2026-08-07")).await.unwrap();
        tokio::fs::write(store.verses_path(), "not json at all")
            .await
            .unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_the_previous_entry() {
        let tmp = tempdir().unwrap();
        let store = FsStore::with_dir(tmp.path());

        store.save(&sample_batch("2026-08-06")).await.unwrap();
        let mut second = sample_batch("2026-08-07");
        second.verses[0].surah = UNKNOWN.to_string();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.date, "2026-08-07");
        assert_eq!(loaded.verses[0].surah, UNKNOWN);
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let batch = sample_batch("2026-08-07");
        store.save(&batch).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(batch));
    }
}

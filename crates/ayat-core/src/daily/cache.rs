//! Date-keyed cache in front of the daily verse fetcher.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::debug;

use crate::daily::fetcher::VerseSource;
use crate::daily::store::{DailyBatch, DailyStore};
use crate::error::CacheResult;
use crate::model::VerseRecord;

/// Source of "today" for cache freshness decisions.
///
/// Injected so freshness is testable without touching the system clock.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock: the caller's local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Day-granular cache over a [`VerseSource`].
///
/// Two states per calendar day: a stored batch dated today is Fresh and
/// served without network access; anything else is Stale and triggers one
/// fetch whose result replaces the entry whole. Midnight invalidates
/// lazily, on the next read.
pub struct DailyCache {
    source: Arc<dyn VerseSource>,
    store: Arc<dyn DailyStore>,
    clock: Arc<dyn Clock>,
    // Serializes check-fetch-persist so concurrent stale readers coalesce
    // into a single upstream fetch.
    gate: Mutex<()>,
}

impl DailyCache {
    pub fn new(
        source: Arc<dyn VerseSource>,
        store: Arc<dyn DailyStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            store,
            clock,
            gate: Mutex::new(()),
        }
    }

    /// Cache reading the system's local calendar date.
    pub fn with_system_clock(source: Arc<dyn VerseSource>, store: Arc<dyn DailyStore>) -> Self {
        Self::new(source, store, Arc::new(SystemClock))
    }

    /// Return today's verse batch, fetching and persisting it if the
    /// stored entry is absent or dated another day.
    ///
    /// The returned list is an owned snapshot; mutating it cannot reach
    /// the persisted entry. An empty list means the upstream had no verses
    /// to offer today.
    pub async fn today_verses(&self) -> CacheResult<Vec<VerseRecord>> {
        let _gate = self.gate.lock().await;

        let today = self.clock.today().format("%Y-%m-%d").to_string();

        if let Some(batch) = self.store.load().await? {
            if batch.date == today {
                debug!(date = %today, verses = batch.verses.len(), "serving fresh daily batch");
                return Ok(batch.verses);
            }
            debug!(stored = %batch.date, today = %today, "stored batch is stale");
        }

        let verses = self.source.fetch_daily().await;
        self.store
            .save(&DailyBatch {
                date: today,
                verses: verses.clone(),
            })
            .await?;

        Ok(verses)
    }
}

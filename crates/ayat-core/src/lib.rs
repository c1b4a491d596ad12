//! Verse retrieval and normalization core.
//!
//! This crate is the contract-bearing heart of the app: it turns a
//! free-text query into a validated list of scripture excerpts via a
//! remote completion service, and serves a deduplicated, date-cached
//! "verses of the day" batch from a public random-verse API. Presentation
//! is someone else's problem; callers hand in a query string or ask for
//! today's verses and render whatever comes back.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use ayat_core::{DailyCache, DailyVerseFetcher, FsStore, SearchClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Free-text search through the completion service.
//! let client = SearchClient::from_env()?;
//! let records = client.search_verses("patience in hardship").await?;
//! for record in &records {
//!     println!("{} {} - {}", record.surah, record.verse, record.translation);
//! }
//!
//! // Today's verses, fetched once per calendar day.
//! let cache = DailyCache::with_system_clock(
//!     Arc::new(DailyVerseFetcher::from_env()),
//!     Arc::new(FsStore::new()?),
//! );
//! let daily = cache.today_verses().await?;
//! assert!(daily.len() == 6 || daily.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `AYAT_API_KEY` | Bearer credential for the completion service |
//! | `AYAT_COMPLETION_URL` | Chat-completions endpoint |
//! | `AYAT_COMPLETION_MODEL` | Model identifier |
//! | `AYAT_VERSE_URL` | Random-verse endpoint base URL |
//! | `AYAT_TIMEOUT` | Request timeout in seconds (default: 30) |
//!
//! # Failure posture
//!
//! Search and parsing failures are typed and propagate unchanged
//! ([`SearchError`], [`ParseError`]); the daily path never fails upward -
//! an unreachable upstream degrades to an empty batch, and only the local
//! store can error ([`CacheError`]).

pub mod auth;
pub mod config;
pub mod daily;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod retry;
pub mod search;

// Re-export main types
pub use auth::TokenProvider;
pub use config::{DailyConfig, SearchConfig};
pub use daily::{
    Clock, DailyBatch, DailyCache, DailyStore, DailyVerseFetcher, FsStore, MemoryStore,
    SystemClock, VerseSource, TAFSIR_PLACEHOLDER,
};
pub use error::{CacheError, CacheResult, ParseError, SearchError, SearchResult};
pub use model::{VerseKey, VerseRecord, UNKNOWN};
pub use parser::parse;
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use retry::{paced_attempts, RetryPolicy};
pub use search::{SearchClient, MAX_RESULTS};

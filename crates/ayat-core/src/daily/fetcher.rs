//! Collection of distinct random verses for the daily batch.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::DailyConfig;
use crate::model::{VerseKey, VerseRecord, UNKNOWN};
use crate::retry::{paced_attempts, RetryPolicy};

/// Commentary placeholder attached to every fetched daily verse.
pub const TAFSIR_PLACEHOLDER: &str = "Tafsir available on request";

/// Anything that can produce a daily verse batch.
///
/// The production implementation is [`DailyVerseFetcher`]; tests substitute
/// fakes. Implementations never fail: an unavailable upstream is an empty
/// batch.
#[async_trait]
pub trait VerseSource: Send + Sync {
    async fn fetch_daily(&self) -> Vec<VerseRecord>;
}

/// Success body of the random-verse endpoint.
#[derive(Debug, Deserialize)]
struct RandomAyahResponse {
    data: AyahData,
}

#[derive(Debug, Deserialize)]
struct AyahData {
    #[serde(rename = "numberInSurah")]
    number_in_surah: u32,

    #[serde(default)]
    text: Option<String>,

    surah: SurahRef,

    #[serde(default)]
    edition: EditionRef,
}

#[derive(Debug, Deserialize)]
struct SurahRef {
    number: u32,

    #[serde(rename = "englishName", default)]
    english_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct EditionRef {
    #[serde(default)]
    text: Option<String>,
}

impl AyahData {
    fn key(&self) -> VerseKey {
        VerseKey::new(self.surah.number, self.number_in_surah)
    }

    fn into_record(self, id: u32) -> VerseRecord {
        VerseRecord {
            id,
            surah: self
                .surah
                .english_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            verse: self.number_in_surah.to_string(),
            text: self.text.unwrap_or_default(),
            translation: self.edition.text.unwrap_or_default(),
            tafsir: Some(TAFSIR_PLACEHOLDER.to_string()),
        }
    }
}

/// Fetcher collecting a fixed number of distinct verses from the
/// random-verse endpoint.
///
/// Slots are filled strictly in order, one outstanding request at a time;
/// the seen-key set is mutated between requests and must not race.
#[derive(Debug, Clone)]
pub struct DailyVerseFetcher {
    client: reqwest::Client,
    config: DailyConfig,
    policy: RetryPolicy,
}

impl DailyVerseFetcher {
    pub fn new(config: DailyConfig) -> Self {
        let policy = RetryPolicy::new(
            config.max_attempts,
            Duration::from_millis(config.pace_ms),
        );
        Self {
            client: reqwest::Client::new(),
            config,
            policy,
        }
    }

    pub fn from_env() -> Self {
        Self::new(DailyConfig::from_env())
    }

    /// Collect the configured number of distinct verses, or nothing.
    ///
    /// The batch is all-or-nothing: a transport failure, an unreadable
    /// body, or a slot that exhausts its attempts without an unseen verse
    /// all degrade to an empty list. Callers treat an empty list as "no
    /// verses available today", not as an error.
    pub async fn fetch_daily(&self) -> Vec<VerseRecord> {
        match self.collect_batch().await {
            Ok(Some(verses)) => verses,
            Ok(None) => {
                warn!(
                    max_attempts = self.config.max_attempts,
                    "slot exhausted without an unseen verse, dropping the batch"
                );
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "daily verse fetch failed, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn collect_batch(&self) -> Result<Option<Vec<VerseRecord>>, reqwest::Error> {
        let mut seen: HashSet<VerseKey> = HashSet::new();
        let mut verses = Vec::with_capacity(self.config.count);

        for slot in 0..self.config.count {
            let accepted = paced_attempts(
                &self.policy,
                || self.fetch_one(),
                |ayah: &AyahData| seen.insert(ayah.key()),
            )
            .await?;

            match accepted {
                Some(ayah) => verses.push(ayah.into_record(slot as u32 + 1)),
                None => return Ok(None),
            }
        }

        Ok(Some(verses))
    }

    async fn fetch_one(&self) -> Result<AyahData, reqwest::Error> {
        let url = format!(
            "{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.count
        );
        debug!(url = %url, "requesting random verse");

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await?
            .error_for_status()?;

        let body: RandomAyahResponse = response.json().await?;
        Ok(body.data)
    }
}

#[async_trait]
impl VerseSource for DailyVerseFetcher {
    async fn fetch_daily(&self) -> Vec<VerseRecord> {
        DailyVerseFetcher::fetch_daily(self).await
    }
}

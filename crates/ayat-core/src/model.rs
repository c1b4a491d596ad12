//! Shared record types for the retrieval core.

use serde::{Deserialize, Serialize};

/// Fallback for an absent chapter name or verse locator.
pub const UNKNOWN: &str = "Unknown";

/// One scripture excerpt, as handed to callers.
///
/// `id` is the 1-based arrival position within a single response batch; it
/// is not globally unique and not stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// 1-based position within the batch that produced this record.
    pub id: u32,

    /// Human-readable chapter name (`"Unknown"` when the source omits it).
    pub surah: String,

    /// Chapter:verse locator or bare verse number (`"Unknown"` when absent).
    pub verse: String,

    /// Original-language text (empty when absent).
    pub text: String,

    /// Rendered translation (empty when absent).
    pub translation: String,

    /// Optional commentary. Absent is legal and distinct from empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tafsir: Option<String>,
}

/// Derived identity used only for deduplication within a daily batch.
///
/// Recomputed from whatever identifying fields the source endpoint returns;
/// never stored on [`VerseRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseKey {
    /// Chapter number.
    pub surah_number: u32,

    /// Verse number within the chapter.
    pub verse_number: u32,
}

impl VerseKey {
    pub fn new(surah_number: u32, verse_number: u32) -> Self {
        Self {
            surah_number,
            verse_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_key_equality_is_pairwise() {
        assert_eq!(VerseKey::new(2, 255), VerseKey::new(2, 255));
        assert_ne!(VerseKey::new(2, 255), VerseKey::new(2, 256));
        assert_ne!(VerseKey::new(2, 255), VerseKey::new(3, 255));
    }

    #[test]
    fn absent_tafsir_is_not_serialized() {
        let record = VerseRecord {
            id: 1,
            surah: "Al-Fatiha".to_string(),
            verse: "1".to_string(),
            text: String::new(),
            translation: "In the name of Allah...".to_string(),
            tafsir: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("tafsir").is_none());

        let round: VerseRecord = serde_json::from_value(json).unwrap();
        assert_eq!(round.tafsir, None);
    }

    #[test]
    fn empty_tafsir_survives_serialization() {
        let record = VerseRecord {
            id: 1,
            surah: UNKNOWN.to_string(),
            verse: UNKNOWN.to_string(),
            text: String::new(),
            translation: String::new(),
            tafsir: Some(String::new()),
        };
        let json = serde_json::to_string(&record).unwrap();
        let round: VerseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(round.tafsir, Some(String::new()));
    }
}

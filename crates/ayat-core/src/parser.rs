//! Normalization of raw completion text into verse records.

use serde_json::Value;

use crate::error::ParseError;
use crate::model::{VerseRecord, UNKNOWN};

/// Parse completion output into an ordered list of verse records.
///
/// The container shape is enforced: the text must be valid JSON
/// ([`ParseError::MalformedJson`]) whose top level is an object with a
/// `results` array ([`ParseError::InvalidShape`]). Individual elements are
/// trusted and mapped defensively; they are not deduplicated, reordered, or
/// checked against a chapter list. `id` is assigned by 1-based position,
/// ignoring any id-like field in the source element.
pub fn parse(raw: &str) -> Result<Vec<VerseRecord>, ParseError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ParseError::MalformedJson {
        message: e.to_string(),
    })?;

    let results = value
        .get("results")
        .ok_or_else(|| ParseError::InvalidShape {
            message: "top-level `results` field is missing".to_string(),
        })?
        .as_array()
        .ok_or_else(|| ParseError::InvalidShape {
            message: "`results` is not an array".to_string(),
        })?;

    Ok(results
        .iter()
        .enumerate()
        .map(|(index, element)| normalize_element(element, index as u32 + 1))
        .collect())
}

/// Map one `results` element onto a record, defaulting absent fields.
///
/// `surah` and `verse` treat an empty string as absent; `tafsir` keeps an
/// empty string and only defaults to `None` when missing or null.
fn normalize_element(element: &Value, id: u32) -> VerseRecord {
    VerseRecord {
        id,
        surah: nonempty_str(element, "surah").unwrap_or_else(|| UNKNOWN.to_string()),
        verse: nonempty_str(element, "verse").unwrap_or_else(|| UNKNOWN.to_string()),
        text: str_field(element, "arabic_text").unwrap_or_default(),
        translation: str_field(element, "translation").unwrap_or_default(),
        tafsir: str_field(element, "tafsir"),
    }
}

fn str_field(element: &Value, key: &str) -> Option<String> {
    element
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn nonempty_str(element: &Value, key: &str) -> Option<String> {
    str_field(element, key).filter(|s| !s.is_empty())
}

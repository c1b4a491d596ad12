//! Instruction text for the completion service.

/// Role instruction sent as the system message with every search request.
pub const SYSTEM_PROMPT: &str = "You are a knowledgeable Quran research assistant. \
     You locate verses relevant to a user's topic and answer ONLY with \
     machine-readable JSON, never with prose.";

/// Build the user instruction for a free-text query.
///
/// Pure and total: any input string, including empty or unrelated text,
/// produces an instruction. The instruction pins the response contract the
/// parser relies on: a single `results` array, fixed element fields, a 3-5
/// result cap, an empty array for unrelated queries, and no embedded line
/// breaks inside string values.
pub fn build_prompt(query: &str) -> String {
    format!(
        "Find Quran verses relevant to the following query.\n\n\
         ### Query:\n<query_text>\n{}\n</query_text>\n\n\
         Respond with a strict JSON object containing a single key \"results\", \
         an array of verse objects. Each object must have exactly these keys: \
         \"surah\" (chapter name), \"verse\" (chapter:verse locator), \
         \"arabic_text\" (original Arabic), \"translation\" (English rendering), \
         \"tafsir\" (brief commentary). \
         Return between 3 and 5 results. \
         If the query is unrelated to the Quran or too ambiguous to match, \
         return {{\"results\": []}} - an empty array is the correct answer, \
         not a refusal. \
         Do not include line breaks inside any string value. \
         Output ONLY the JSON object, nothing else.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_pins_the_response_contract() {
        let prompt = build_prompt("patience in hardship");
        assert!(prompt.contains("patience in hardship"));
        assert!(prompt.contains("\"results\""));
        for field in ["surah", "verse", "arabic_text", "translation", "tafsir"] {
            assert!(prompt.contains(field), "missing field {field}");
        }
        assert!(prompt.contains("between 3 and 5"));
        assert!(prompt.contains("empty array"));
        assert!(prompt.contains("line breaks"));
    }

    #[test]
    fn prompt_is_total_and_deterministic() {
        assert_eq!(build_prompt(""), build_prompt(""));
        let a = build_prompt("weather in Paris");
        let b = build_prompt("weather in Paris");
        assert_eq!(a, b);
        assert!(!build_prompt("").is_empty());
    }
}

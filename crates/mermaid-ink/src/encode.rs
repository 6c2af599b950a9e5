//! Diagram source cleaning and URL-safe encoding.
//!
//! mermaid.ink takes the diagram embedded in the request path as URL-safe
//! base64 (`-_` alphabet, padded).

use base64::Engine;
use base64::prelude::BASE64_URL_SAFE;

use crate::error::ConvertError;

/// Opening Markdown fence of a Mermaid code block.
const MERMAID_FENCE: &str = "```mermaid";
/// Bare Markdown fence.
const FENCE: &str = "```";

/// Remove Markdown fence markers anywhere in the text and trim whitespace.
///
/// Agents often paste diagrams still wrapped in a fenced code block.
#[must_use]
pub fn clean_source(source: &str) -> String {
    source
        .replace(MERMAID_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_owned()
}

/// Encode cleaned diagram source for the request path.
#[must_use]
pub fn encode_diagram(cleaned: &str) -> String {
    BASE64_URL_SAFE.encode(cleaned.as_bytes())
}

/// Decode a path-embedded diagram back to its source.
///
/// # Errors
///
/// Returns [`ConvertError::Encoding`] if the input is not URL-safe base64
/// or does not decode to UTF-8.
pub fn decode_diagram(encoded: &str) -> Result<String, ConvertError> {
    let bytes = BASE64_URL_SAFE
        .decode(encoded)
        .map_err(|e| ConvertError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ConvertError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_fences() {
        let source = "```mermaid\nflowchart TD\n  A-->B\n```\n";
        assert_eq!(clean_source(source), "flowchart TD\n  A-->B");
    }

    #[test]
    fn test_clean_strips_bare_fences() {
        assert_eq!(clean_source("```\npie\n```"), "pie");
    }

    #[test]
    fn test_clean_trims_whitespace() {
        assert_eq!(clean_source("  \n graph LR \n\t"), "graph LR");
    }

    #[test]
    fn test_clean_strips_fences_mid_text() {
        assert_eq!(clean_source("A```B"), "AB");
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet() {
        // "??>" encodes to "Pz8+" in the standard alphabet
        assert_eq!(encode_diagram("??>"), "Pz8-");
        // "???" encodes to "Pz8/" in the standard alphabet
        assert_eq!(encode_diagram("???"), "Pz8_");
    }

    #[test]
    fn test_encode_keeps_padding() {
        assert_eq!(encode_diagram("pie"), "cGll");
        assert_eq!(encode_diagram("pi"), "cGk=");
        assert_eq!(encode_diagram("p"), "cA==");
    }

    #[test]
    fn test_round_trip_returns_cleaned_text() {
        let sources = [
            "flowchart TD\nA-->B",
            "```mermaid\nsequenceDiagram\n  Alice->>Bob: Hi ✓\n```",
            "graph LR\n  A[\"引号\"] --> B",
        ];
        for source in sources {
            let cleaned = clean_source(source);
            let decoded = decode_diagram(&encode_diagram(&cleaned)).unwrap();
            assert_eq!(decoded, cleaned);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = decode_diagram("not*base64").unwrap_err();
        assert!(matches!(err, ConvertError::Encoding(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        // 0xFF 0xFE is not valid UTF-8
        let encoded = BASE64_URL_SAFE.encode([0xFF, 0xFE]);
        let err = decode_diagram(&encoded).unwrap_err();
        assert!(matches!(err, ConvertError::Encoding(_)));
    }
}

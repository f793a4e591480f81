//! Extraction backends
//!
//! Two implementations of the core's `CommandExtractor` port: an
//! OpenAI-compatible HTTP client and a deterministic rule-based matcher.
//! The pipeline treats both identically; the rule-based one doubles as an
//! offline fallback and a deterministic test backend.

pub mod openai;
pub mod rules;

/// Strip a Markdown code fence from model output, if present.
///
/// Models regularly wrap JSON answers in ```json fences even when asked
/// not to; parsing must tolerate both shapes.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) on the opening fence.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(strip_code_fences(r#"  {"a": 1}  "#), r#"{"a": 1}"#);
    }

    #[test]
    fn strips_json_fence() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fence() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
    }
}

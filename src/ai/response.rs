//! Parsing of Messages API responses into reply content.

use super::GenerationError;
use crate::engine::GeneratedContent;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```json|```").expect("code fence pattern is valid")
});

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
struct DraftPayload {
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

/// Turn a raw Messages API response body into reply content.
///
/// The model's text blocks are joined, Markdown code fences are stripped and
/// the remainder must be a JSON object with a non-empty `body`. A missing
/// `subject` comes back as an empty string for the caller to fill in.
pub fn parse_response(raw: &str) -> Result<GeneratedContent, GenerationError> {
    let response: MessagesResponse = serde_json::from_str(raw)
        .map_err(|e| GenerationError::MalformedResponse(format!("response envelope: {}", e)))?;

    let text: String = response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ResponseBlock::Text { text } => Some(text),
            ResponseBlock::Unsupported => None,
        })
        .collect();

    parse_draft(&text)
}

/// Parse the model's own text (possibly fenced) into reply content.
pub fn parse_draft(text: &str) -> Result<GeneratedContent, GenerationError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "model returned no text".to_string(),
        ));
    }

    let payload: DraftPayload = serde_json::from_str(&cleaned)
        .map_err(|e| GenerationError::MalformedResponse(format!("draft JSON: {}", e)))?;

    let body = payload
        .body
        .filter(|b| !b.trim().is_empty())
        .ok_or(GenerationError::MissingField("body"))?;

    Ok(GeneratedContent {
        subject: payload.subject.unwrap_or_default().trim().to_string(),
        body,
    })
}

fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(text: &str) -> String {
        json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "text", "text": text }],
            "stop_reason": "end_turn"
        })
        .to_string()
    }

    #[test]
    fn parses_plain_json_draft() {
        let raw = envelope(r#"{"subject": "Gone", "body": "I am away."}"#);
        let content = parse_response(&raw).unwrap();
        assert_eq!(content.subject, "Gone");
        assert_eq!(content.body, "I am away.");
    }

    #[test]
    fn strips_code_fences() {
        let raw = envelope("```json\n{\"subject\": \"Gone\", \"body\": \"Away.\"}\n```");
        let content = parse_response(&raw).unwrap();
        assert_eq!(content.body, "Away.");
    }

    #[test]
    fn joins_text_blocks_and_skips_others() {
        let raw = json!({
            "content": [
                { "type": "thinking", "thinking": "hmm" },
                { "type": "text", "text": "{\"subject\": \"A\", " },
                { "type": "text", "text": "\"body\": \"B\"}" }
            ]
        })
        .to_string();
        let content = parse_response(&raw).unwrap();
        assert_eq!(content.subject, "A");
        assert_eq!(content.body, "B");
    }

    #[test]
    fn missing_subject_is_empty() {
        let content = parse_draft(r#"{"body": "Away."}"#).unwrap();
        assert_eq!(content.subject, "");
    }

    #[test]
    fn missing_body_is_an_error() {
        let err = parse_draft(r#"{"subject": "Gone"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::MissingField("body")));

        let err = parse_draft(r#"{"subject": "Gone", "body": "  "}"#).unwrap_err();
        assert!(matches!(err, GenerationError::MissingField("body")));
    }

    #[test]
    fn prose_instead_of_json_is_malformed() {
        let err = parse_response(&envelope("Sure! Here's your email:")).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn empty_content_is_malformed() {
        let err = parse_response(r#"{"content": []}"#).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_envelope_is_malformed() {
        let err = parse_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }
}

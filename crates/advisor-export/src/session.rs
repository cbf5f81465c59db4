//! Session transcript data model
//!
//! A session is an ordered log of timestamped events from multiple authors
//! (the user and the various agents). Each event carries a list of content
//! parts; parts are a closed variant set so unrecognized shapes are
//! skipped explicitly rather than probed field-by-field.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A recorded conversation session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Application that produced the session
    #[serde(default)]
    pub app_name: Option<String>,
    /// User the session belongs to
    #[serde(default)]
    pub user_id: Option<String>,
    /// Last update timestamp, ISO-8601-ish
    #[serde(default)]
    pub last_update_time: Option<String>,
    /// Ordered event log
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One timestamped record of authored content within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// "user" or an agent name
    #[serde(default = "unknown_author")]
    pub author: String,
    /// ISO-8601-ish timestamp, optional trailing `Z`
    #[serde(default)]
    pub timestamp: String,
    /// Event content; events without content produce no messages
    #[serde(default)]
    pub content: Option<Content>,
}

fn unknown_author() -> String {
    "unknown".to_string()
}

/// Ordered content parts of an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part
///
/// Closed variant set: plain text (optionally marked as internal reasoning
/// via a thought signature) or a function response relayed from another
/// agent. Anything else lands in `Other` and is ignored by the classifier.
///
/// Untagged variants are tried in declaration order, so a part carrying
/// both `functionResponse` and `text` resolves as a function response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
    Text {
        text: String,
        #[serde(rename = "thoughtSignature", skip_serializing_if = "Option::is_none")]
        thought_signature: Option<String>,
    },
    Other(Value),
}

impl Part {
    /// True for text parts carrying a thought signature (internal reasoning)
    pub fn is_thought(&self) -> bool {
        matches!(
            self,
            Part::Text {
                thought_signature: Some(_),
                ..
            }
        )
    }
}

/// Agent-to-agent output relayed as a function response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResponse {
    /// Name of the agent that produced the response
    #[serde(default = "unknown_agent")]
    pub name: String,
    /// Response payload; only the `result` field is rendered
    #[serde(default)]
    pub response: FunctionResponsePayload,
}

fn unknown_agent() -> String {
    "unknown_agent".to_string()
}

/// Payload of a function response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl Session {
    /// Load a session from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Session ID for display, "N/A" if absent
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("N/A")
    }

    /// App name for display, "N/A" if absent
    pub fn display_app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("N/A")
    }

    /// User ID for display, "N/A" if absent
    pub fn display_user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or("N/A")
    }

    /// Last update time for display, "N/A" if absent
    pub fn display_last_update(&self) -> &str {
        self.last_update_time.as_deref().unwrap_or("N/A")
    }
}

impl Event {
    /// Concatenated text of all text parts, in part order
    ///
    /// Used by the PDF path, which renders events raw instead of running
    /// the classifier.
    pub fn plain_text(&self) -> String {
        let Some(content) = &self.content else {
            return String::new();
        };
        let mut lines = Vec::new();
        for part in &content.parts {
            if let Part::Text { text, .. } = part {
                lines.push(text.as_str());
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_part() {
        let part: Part = serde_json::from_str(r#"{"text": "Hello"}"#).expect("valid part");
        match part {
            Part::Text {
                text,
                thought_signature,
            } => {
                assert_eq!(text, "Hello");
                assert!(thought_signature.is_none());
            }
            _ => panic!("Expected text part"),
        }
    }

    #[test]
    fn test_parse_thought_part() {
        let part: Part =
            serde_json::from_str(r#"{"text": "internal", "thoughtSignature": "sig"}"#)
                .expect("valid part");
        assert!(part.is_thought());
    }

    #[test]
    fn test_parse_function_response_part() {
        let raw = r#"{"functionResponse": {"name": "data_analyst_agent", "response": {"result": "Report"}}}"#;
        let part: Part = serde_json::from_str(raw).expect("valid part");
        match part {
            Part::FunctionResponse { function_response } => {
                assert_eq!(function_response.name, "data_analyst_agent");
                assert_eq!(
                    function_response.response.result,
                    Some(Value::String("Report".to_string()))
                );
            }
            _ => panic!("Expected function response part"),
        }
    }

    #[test]
    fn test_function_response_wins_over_text() {
        let raw = r#"{
            "text": "also present",
            "functionResponse": {"name": "data_analyst_agent", "response": {"result": "Report"}}
        }"#;
        let part: Part = serde_json::from_str(raw).expect("valid part");
        assert!(matches!(part, Part::FunctionResponse { .. }));
    }

    #[test]
    fn test_unrecognized_part_becomes_other() {
        let part: Part =
            serde_json::from_str(r#"{"inlineData": {"mimeType": "image/png"}}"#).expect("parses");
        assert!(matches!(part, Part::Other(_)));
    }

    #[test]
    fn test_session_defaults() {
        let session: Session = serde_json::from_str(r#"{"events": []}"#).expect("valid session");
        assert_eq!(session.display_id(), "N/A");
        assert_eq!(session.display_app_name(), "N/A");
        assert!(session.events.is_empty());
    }

    #[test]
    fn test_event_plain_text_skips_function_responses() {
        let raw = r#"{
            "author": "data_analyst_agent",
            "timestamp": "2025-01-20T10:00:00Z",
            "content": {"parts": [
                {"text": "line one"},
                {"functionResponse": {"name": "x", "response": {"result": "r"}}},
                {"text": "line two"}
            ]}
        }"#;
        let event: Event = serde_json::from_str(raw).expect("valid event");
        assert_eq!(event.plain_text(), "line one\nline two");
    }
}

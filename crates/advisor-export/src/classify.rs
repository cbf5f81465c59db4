//! Event classification into renderable messages
//!
//! Derives a flat message list from an event's content parts. Derivation is
//! a pure function of the event: no mutation, no external state. Parts that
//! match none of the rules are skipped silently.

use crate::session::{Event, Part};
use serde_json::Value;

/// Kind of a derived message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Text the user typed
    User,
    /// Visible agent text (thought-marked parts are excluded)
    AgentResponse,
    /// Agent-to-agent output relayed as a function response result
    AgentOutput,
}

/// A message derived from one part of one event
#[derive(Debug, Clone)]
pub struct Message {
    pub kind: MessageKind,
    pub content: String,
    pub agent_name: Option<String>,
}

/// Classify an event's parts into messages, preserving part order
///
/// Rules, per part:
/// - author "user" (case-insensitive) + text part -> `User`
/// - text part without thought marker, non-user author -> `AgentResponse`
/// - function response with a `result` field -> `AgentOutput`
pub fn classify_event(event: &Event) -> Vec<Message> {
    let mut messages = Vec::new();
    let Some(content) = &event.content else {
        return messages;
    };
    let is_user = event.author.eq_ignore_ascii_case("user");

    for part in &content.parts {
        match part {
            Part::Text {
                text,
                thought_signature,
            } => {
                if is_user {
                    messages.push(Message {
                        kind: MessageKind::User,
                        content: text.clone(),
                        agent_name: None,
                    });
                } else if thought_signature.is_none() {
                    messages.push(Message {
                        kind: MessageKind::AgentResponse,
                        content: text.clone(),
                        agent_name: Some(event.author.clone()),
                    });
                }
            }
            Part::FunctionResponse { function_response } => {
                if let Some(result) = &function_response.response.result {
                    messages.push(Message {
                        kind: MessageKind::AgentOutput,
                        content: value_to_text(result),
                        agent_name: Some(function_response.name.clone()),
                    });
                }
            }
            Part::Other(_) => {}
        }
    }

    messages
}

/// Total classified message count across all events of a session
pub fn classified_message_count(session: &crate::session::Session) -> usize {
    session.events.iter().map(|e| classify_event(e).len()).sum()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format an agent name for display
///
/// snake_case becomes Title Case and a trailing "Agent" word is dropped:
/// `risk_analyst_agent` -> "Risk Analyst". Missing names default to
/// "Assistant".
pub fn format_agent_name(agent_name: Option<&str>) -> String {
    let Some(name) = agent_name.filter(|n| !n.is_empty()) else {
        return "Assistant".to_string();
    };

    let titled = name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    titled.replace(" Agent", "")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Event;

    fn event(raw: &str) -> Event {
        serde_json::from_str(raw).expect("valid event")
    }

    #[test]
    fn test_user_text_part() {
        let messages = classify_event(&event(
            r#"{"author": "user", "timestamp": "", "content": {"parts": [{"text": "Hello"}]}}"#,
        ));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::User);
        assert_eq!(messages[0].content, "Hello");
        assert!(messages[0].agent_name.is_none());
    }

    #[test]
    fn test_agent_text_part() {
        let messages = classify_event(&event(
            r#"{"author": "data_analyst_agent", "content": {"parts": [{"text": "Report ready"}]}}"#,
        ));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::AgentResponse);
        assert_eq!(messages[0].agent_name.as_deref(), Some("data_analyst_agent"));
    }

    #[test]
    fn test_thought_part_is_excluded() {
        let messages = classify_event(&event(
            r#"{"author": "risk_analyst_agent", "content": {"parts": [
                {"text": "thinking...", "thoughtSignature": "sig"},
                {"text": "visible answer"}
            ]}}"#,
        ));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "visible answer");
    }

    #[test]
    fn test_function_response_with_result() {
        let messages = classify_event(&event(
            r#"{"author": "financial_coordinator", "content": {"parts": [
                {"functionResponse": {"name": "trading_analyst_agent", "response": {"result": "Strategies"}}}
            ]}}"#,
        ));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::AgentOutput);
        assert_eq!(
            messages[0].agent_name.as_deref(),
            Some("trading_analyst_agent")
        );
        assert_eq!(messages[0].content, "Strategies");
    }

    #[test]
    fn test_function_response_without_result_is_skipped() {
        let messages = classify_event(&event(
            r#"{"author": "coordinator", "content": {"parts": [
                {"functionResponse": {"name": "x", "response": {}}}
            ]}}"#,
        ));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_event_without_content() {
        let messages = classify_event(&event(r#"{"author": "user"}"#));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_part_order_is_preserved() {
        let messages = classify_event(&event(
            r#"{"author": "user", "content": {"parts": [{"text": "first"}, {"text": "second"}]}}"#,
        ));
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].content, "second");
    }

    #[test]
    fn test_format_agent_name() {
        assert_eq!(
            format_agent_name(Some("risk_analyst_agent")),
            "Risk Analyst"
        );
        assert_eq!(format_agent_name(Some("data_analyst")), "Data Analyst");
        assert_eq!(format_agent_name(None), "Assistant");
        assert_eq!(format_agent_name(Some("")), "Assistant");
    }
}

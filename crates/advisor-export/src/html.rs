//! Self-contained HTML document renderer
//!
//! Produces one offline-renderable page: metadata block, then the
//! classified messages in original order, styled per message kind. A print
//! button lets the browser handle paged output. All dynamic content goes
//! through the escaping renderer before markup injection.

use crate::classify::{MessageKind, classify_event, format_agent_name};
use crate::markdown::{escape_html, markdown_to_html};
use crate::session::Session;
use crate::timestamp::parse_timestamp;

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Conversation Export</title>
    <style>
        @media print {
            body { margin: 0.5in; }
            .message { page-break-inside: avoid; }
            .print-button { display: none; }
            .metadata { page-break-after: avoid; }
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
            color: #1a1a1a;
            line-height: 1.6;
        }
        .container {
            background-color: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }
        h1 {
            color: #1a1a1a;
            font-size: 28px;
            margin-bottom: 10px;
            font-weight: 600;
        }
        .subtitle {
            color: #65676b;
            font-size: 14px;
            margin-bottom: 25px;
        }
        .metadata {
            background-color: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            margin: 20px 0 30px 0;
            font-size: 13px;
            border-left: 4px solid #0084ff;
        }
        .metadata p {
            margin: 5px 0;
            color: #586069;
        }
        .metadata strong {
            color: #24292e;
            font-weight: 600;
        }
        .chat-container {
            display: flex;
            flex-direction: column;
            gap: 16px;
        }
        .message {
            display: flex;
            flex-direction: column;
            margin: 8px 0;
        }
        .message.user {
            align-items: flex-end;
        }
        .message.agent, .message.agent-output {
            align-items: flex-start;
        }
        .message-bubble {
            max-width: 90%;
            padding: 14px 18px;
            border-radius: 12px;
            position: relative;
            box-shadow: 0 1px 2px rgba(0,0,0,0.1);
        }
        .message.user .message-bubble {
            background-color: #0084ff;
            color: white;
            border-bottom-right-radius: 4px;
        }
        .message.agent .message-bubble {
            background-color: #f0f0f0;
            color: #1a1a1a;
            border-bottom-left-radius: 4px;
        }
        .message.agent-output .message-bubble {
            background-color: #e8f5e9;
            color: #1a1a1a;
            border-bottom-left-radius: 4px;
            border-left: 3px solid #4caf50;
        }
        .author-label {
            font-size: 12px;
            font-weight: 600;
            margin-bottom: 6px;
            padding: 0 6px;
            display: flex;
            align-items: center;
            gap: 6px;
        }
        .message.user .author-label {
            color: #0084ff;
            justify-content: flex-end;
        }
        .message.agent .author-label {
            color: #65676b;
        }
        .message.agent-output .author-label {
            color: #2e7d32;
        }
        .agent-badge {
            background-color: #e8f5e9;
            color: #2e7d32;
            padding: 2px 8px;
            border-radius: 10px;
            font-size: 11px;
            font-weight: 600;
        }
        .timestamp {
            font-size: 11px;
            color: #999;
            margin-top: 4px;
            padding: 0 6px;
        }
        .message.user .timestamp {
            text-align: right;
        }
        .content {
            white-space: pre-wrap;
            word-wrap: break-word;
            font-size: 14px;
            line-height: 1.6;
        }
        .content h1 {
            font-size: 20px;
            font-weight: 600;
            margin: 12px 0 8px 0;
            color: inherit;
        }
        .content h2 {
            font-size: 18px;
            font-weight: 600;
            margin: 10px 0 6px 0;
            color: inherit;
        }
        .content h3 {
            font-size: 16px;
            font-weight: 600;
            margin: 8px 0 4px 0;
            color: inherit;
        }
        .content strong {
            font-weight: 600;
        }
        .content em {
            font-style: italic;
        }
        .content code {
            background-color: rgba(0,0,0,0.05);
            padding: 2px 6px;
            border-radius: 3px;
            font-family: 'Monaco', 'Menlo', 'Consolas', monospace;
            font-size: 13px;
        }
        .message.user .content code {
            background-color: rgba(255,255,255,0.2);
        }
        .content ul, .content ol {
            margin: 8px 0;
            padding-left: 24px;
        }
        .content li {
            margin: 4px 0;
        }
        .content a {
            color: #0084ff;
            text-decoration: underline;
        }
        .message.user .content a {
            color: #ffffff;
        }
        .print-button {
            background-color: #0084ff;
            color: white;
            border: none;
            padding: 12px 24px;
            border-radius: 6px;
            cursor: pointer;
            font-size: 14px;
            font-weight: 600;
            margin: 20px 0;
            transition: background-color 0.2s;
        }
        .print-button:hover {
            background-color: #0073e6;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>&#128172; Conversation Export</h1>
        <div class="subtitle">Multi-Agent Financial Advisor Conversation</div>

        <button class="print-button" onclick="window.print()">&#128424; Print to PDF</button>
"#;

const HTML_FOOT: &str = "    </div>\n</body>\n</html>\n";

/// Render a full session into a self-contained HTML page
pub fn render_session_html(session: &Session) -> String {
    let mut html = String::from(HTML_HEAD);

    html.push_str("<div class=\"metadata\">\n");
    html.push_str(&format!(
        "<p><strong>Session ID:</strong> {}</p>\n",
        escape_html(session.display_id())
    ));
    html.push_str(&format!(
        "<p><strong>App Name:</strong> {}</p>\n",
        escape_html(session.display_app_name())
    ));
    html.push_str(&format!(
        "<p><strong>User ID:</strong> {}</p>\n",
        escape_html(session.display_user_id())
    ));
    html.push_str(&format!(
        "<p><strong>Last Update:</strong> {}</p>\n",
        escape_html(&parse_timestamp(session.display_last_update()))
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"chat-container\">\n");

    for event in &session.events {
        let timestamp = parse_timestamp(&event.timestamp);
        for message in classify_event(event) {
            let content = markdown_to_html(&message.content);
            match message.kind {
                MessageKind::User => {
                    html.push_str("<div class=\"message user\">\n");
                    html.push_str("  <div class=\"author-label\">You</div>\n");
                    push_bubble(&mut html, &content, &timestamp);
                }
                MessageKind::AgentResponse => {
                    let label = format_agent_name(message.agent_name.as_deref());
                    html.push_str("<div class=\"message agent\">\n");
                    html.push_str(&format!(
                        "  <div class=\"author-label\">{}</div>\n",
                        escape_html(&label)
                    ));
                    push_bubble(&mut html, &content, &timestamp);
                }
                MessageKind::AgentOutput => {
                    let label = format_agent_name(message.agent_name.as_deref());
                    html.push_str("<div class=\"message agent-output\">\n");
                    html.push_str(&format!(
                        "  <div class=\"author-label\"><span class=\"agent-badge\">&#129302; {}</span></div>\n",
                        escape_html(&label)
                    ));
                    push_bubble(&mut html, &content, &timestamp);
                }
            }
        }
    }

    html.push_str("</div>\n");
    html.push_str(HTML_FOOT);
    html
}

fn push_bubble(html: &mut String, content: &str, timestamp: &str) {
    html.push_str("  <div class=\"message-bubble\">\n");
    html.push_str(&format!("    <div class=\"content\">{content}</div>\n"));
    html.push_str("  </div>\n");
    html.push_str(&format!(
        "  <div class=\"timestamp\">{}</div>\n",
        escape_html(timestamp)
    ));
    html.push_str("</div>\n\n");
}

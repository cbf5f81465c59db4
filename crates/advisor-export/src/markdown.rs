//! Minimal Markdown-subset renderer
//!
//! Supports headers, bold, italic, inline code, links, and un/ordered
//! lists. Raw text is HTML-escaped before any markup substitution, so the
//! transform is safe to call exactly once on raw input; re-running it on
//! its own output double-escapes.
//!
//! The underscore italic rule approximates word boundaries with consumed
//! neighbor characters instead of lookarounds; it can misfire on text with
//! underscores in non-emphasis contexts (e.g. identifiers). Known
//! limitation, kept as observed behavior.

use regex::Regex;
use std::sync::LazyLock;

static HEADER3: LazyLock<Regex> = LazyLock::new(|| re(r"(?m)^### (.+)$"));
static HEADER2: LazyLock<Regex> = LazyLock::new(|| re(r"(?m)^## (.+)$"));
static HEADER1: LazyLock<Regex> = LazyLock::new(|| re(r"(?m)^# (.+)$"));
static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| re(r"\*\*(.+?)\*\*"));
static BOLD_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| re(r"__(.+?)__"));
static ITALIC_STARS: LazyLock<Regex> = LazyLock::new(|| re(r"\*(.+?)\*"));
static ITALIC_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)(^|[^\w])_(.+?)_([^\w]|$)"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| re(r"`(.+?)`"));
static LINK: LazyLock<Regex> = LazyLock::new(|| re(r"\[(.+?)\]\((.+?)\)"));
static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| re(r"^\s*[-*+]\s+(.+)$"));
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| re(r"^\s*\d+\.\s+(.+)$"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid markdown pattern")
}

/// Escape HTML special characters
///
/// Must run before markup injection, exactly once; `&` is replaced first
/// so entities are not themselves re-escaped.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Convert the supported Markdown subset to HTML
///
/// Substitution order matters: headers, bold, italic, inline code, links,
/// then list grouping. Empty input renders to an empty string.
pub fn markdown_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = escape_html(text);

    out = HEADER3.replace_all(&out, "<h3>${1}</h3>").into_owned();
    out = HEADER2.replace_all(&out, "<h2>${1}</h2>").into_owned();
    out = HEADER1.replace_all(&out, "<h1>${1}</h1>").into_owned();

    out = BOLD_STARS
        .replace_all(&out, "<strong>${1}</strong>")
        .into_owned();
    out = BOLD_UNDERSCORES
        .replace_all(&out, "<strong>${1}</strong>")
        .into_owned();

    out = ITALIC_STARS.replace_all(&out, "<em>${1}</em>").into_owned();
    out = ITALIC_UNDERSCORES
        .replace_all(&out, "${1}<em>${2}</em>${3}")
        .into_owned();

    out = INLINE_CODE.replace_all(&out, "<code>${1}</code>").into_owned();
    out = LINK
        .replace_all(&out, r#"<a href="${2}" target="_blank">${1}</a>"#)
        .into_owned();

    out = group_list_lines(&out, &UNORDERED_ITEM, "ul");
    out = group_list_lines(&out, &ORDERED_ITEM, "ol");

    out
}

/// Group consecutive matching lines into one enclosing list block
///
/// A non-matching line closes any open list before being emitted.
fn group_list_lines(text: &str, item: &Regex, tag: &str) -> String {
    let mut result_lines: Vec<String> = Vec::new();
    let mut in_list = false;

    for line in text.split('\n') {
        if let Some(caps) = item.captures(line) {
            if !in_list {
                result_lines.push(format!("<{tag}>"));
                in_list = true;
            }
            result_lines.push(format!("<li>{}</li>", &caps[1]));
        } else {
            if in_list {
                result_lines.push(format!("</{tag}>"));
                in_list = false;
            }
            result_lines.push(line.to_string());
        }
    }

    if in_list {
        result_lines.push(format!("</{tag}>"));
    }

    result_lines.join("\n")
}

//! PDF document renderer
//!
//! Walks events directly instead of running the classifier, one numbered
//! entry per event with a separator rule after each. This asymmetry with
//! the HTML path is preserved observed behavior: the two exporters can
//! report different message counts for the same session.

use crate::error::{ExportError, Result};
use crate::session::Session;
use crate::timestamp::parse_timestamp;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

// US Letter with 0.75in margins
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 19.05;
const LINE_HEIGHT_MM: f32 = 4.6;

// Helvetica at 11pt fits roughly this many characters in the usable width
const WRAP_COLUMNS: usize = 92;

const COLOR_TITLE: (f32, f32, f32) = (0.10, 0.10, 0.10);
const COLOR_USER: (f32, f32, f32) = (0.0, 0.40, 0.80);
const COLOR_AGENT: (f32, f32, f32) = (0.0, 0.40, 0.0);
const COLOR_TIMESTAMP: (f32, f32, f32) = (0.40, 0.40, 0.40);
const COLOR_SEPARATOR: (f32, f32, f32) = (0.80, 0.80, 0.80);

/// Render a session into PDF bytes
pub fn render_session_pdf(session: &Session) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Conversation Export",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = builtin(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin(&doc, BuiltinFont::HelveticaBold)?;
    let italic = builtin(&doc, BuiltinFont::HelveticaOblique)?;

    let mut writer = PageWriter::new(&doc, doc.get_page(page).get_layer(layer));

    writer.text_line("Conversation Export", 16.0, &bold, COLOR_TITLE);
    writer.spacer(4.0);

    writer.text_line(
        &format!("Session ID: {}", session.display_id()),
        11.0,
        &regular,
        COLOR_TITLE,
    );
    writer.text_line(
        &format!("App Name: {}", session.display_app_name()),
        11.0,
        &regular,
        COLOR_TITLE,
    );
    writer.text_line(
        &format!("User ID: {}", session.display_user_id()),
        11.0,
        &regular,
        COLOR_TITLE,
    );
    writer.text_line(
        &format!(
            "Last Update: {}",
            parse_timestamp(session.display_last_update())
        ),
        11.0,
        &regular,
        COLOR_TITLE,
    );
    writer.spacer(6.0);
    writer.separator();

    for (idx, event) in session.events.iter().enumerate() {
        writer.text_line(
            &format!("Message {} - {}", idx + 1, parse_timestamp(&event.timestamp)),
            9.0,
            &bold,
            COLOR_TIMESTAMP,
        );

        let (label, color) = if event.author.eq_ignore_ascii_case("user") {
            ("User:".to_string(), COLOR_USER)
        } else {
            (format!("Agent ({}):", event.author), COLOR_AGENT)
        };
        writer.text_line(&label, 11.0, &bold, color);

        let content = event.plain_text();
        if content.is_empty() {
            writer.text_line("(No content)", 11.0, &italic, color);
        } else {
            for line in content.split('\n') {
                for wrapped in wrap_line(line, WRAP_COLUMNS) {
                    writer.text_line(&wrapped, 11.0, &regular, color);
                }
            }
        }

        writer.spacer(3.0);
        writer.separator();
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Tracks a vertical cursor and starts a fresh page when the margin is hit
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn text_line(&mut self, text: &str, size: f32, font: &IndirectFontRef, rgb: (f32, f32, f32)) {
        self.ensure_room(LINE_HEIGHT_MM);
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(rgb.0, rgb.1, rgb.2, None)));
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn spacer(&mut self, mm: f32) {
        self.ensure_room(mm);
        self.y -= mm;
    }

    /// Thin horizontal rule across the usable width
    fn separator(&mut self) {
        self.ensure_room(6.0);
        self.layer.set_outline_color(Color::Rgb(Rgb::new(
            COLOR_SEPARATOR.0,
            COLOR_SEPARATOR.1,
            COLOR_SEPARATOR.2,
            None,
        )));
        self.layer.set_outline_thickness(0.3);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(self.y)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(self.y)), false),
            ],
            is_closed: false,
        });
        self.y -= 6.0;
    }
}

/// Greedy word wrap; words longer than the column limit are hard-split
fn wrap_line(line: &str, columns: usize) -> Vec<String> {
    if line.chars().count() <= columns {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current_len + word_len + usize::from(!current.is_empty()) > columns {
            if !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
            }
            if word_len > columns {
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(columns) {
                    wrapped.push(chunk.iter().collect());
                }
                continue;
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_event_session() -> Session {
        serde_json::from_str(
            r#"{
                "id": "session-1",
                "appName": "financial_advisor",
                "userId": "user-42",
                "lastUpdateTime": "2025-01-20T15:00:00Z",
                "events": [
                    {
                        "author": "user",
                        "timestamp": "2025-01-20T14:59:00Z",
                        "content": {"parts": [{"text": "Hello"}]}
                    },
                    {
                        "author": "data_analyst_agent",
                        "timestamp": "2025-01-20T15:00:00Z",
                        "content": {"parts": [{"text": "Report ready"}]}
                    }
                ]
            }"#,
        )
        .expect("valid session")
    }

    #[test]
    fn test_renders_pdf_bytes() {
        let bytes = render_session_pdf(&two_event_session()).expect("renders");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_two_numbered_entries_in_content_stream() {
        // Builtin-font text is written uncompressed, so the entry headers
        // are findable in the raw output.
        let bytes = render_session_pdf(&two_event_session()).expect("renders");
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("Message 1"));
        assert!(raw.contains("Message 2"));
        assert!(!raw.contains("Message 3"));
    }

    #[test]
    fn test_event_without_content_gets_placeholder() {
        let session: Session = serde_json::from_str(
            r#"{"events": [{"author": "user", "timestamp": ""}]}"#,
        )
        .expect("valid");
        let bytes = render_session_pdf(&session).expect("renders");
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("(No content)"));
    }

    #[test]
    fn test_wrap_line() {
        let short = wrap_line("short line", 92);
        assert_eq!(short, vec!["short line".to_string()]);

        let long = "word ".repeat(40);
        let wrapped = wrap_line(long.trim(), 20);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 20));
    }
}

//! Status-code hover resolution.
//!
//! Given a cursor position in a document, finds a 3-digit status code
//! token under the cursor, validates it against the status table, and
//! renders a markdown tooltip with a documentation link. Every failure
//! mode (filtered out, no token, invalid token, unknown code) silently
//! yields no hover; hovering is a passive affordance and never errors.

use once_cell::sync::Lazy;
use regex::Regex;

use super::filter::FiletypeFilter;
use crate::status::{self, StatusCodeInfo};

/// Word-boundary pattern that triggers a hover: a 3-digit sequence whose
/// first digit is 1..=5, as a whole word. `21000` and `abc200xyz` do not
/// contain a match.
static STATUS_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[1-5]\d{2}\b").expect("status code pattern"));

/// Strict shape check applied to the extracted token.
static STRICT_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-5]\d{2}$").expect("strict code pattern"));

/// Position in a text document (zero-based line and character).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A range in a text document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Hover content anchored to the matched span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    /// Markdown to display. Plain text and links only; nothing in it may
    /// carry command or script capability.
    pub contents: String,
    /// The span of the matched status code token.
    pub range: Range,
}

/// Resolves a hover for the document position, if any.
///
/// The filter decision is consulted first: a document whose language id /
/// file name the filter rejects never produces a hover regardless of what
/// is under the cursor.
pub fn provide_hover(
    position: Position,
    document: &str,
    filter: &FiletypeFilter,
    language_id: &str,
    file_name: &str,
) -> Option<Hover> {
    if !filter.is_enabled(language_id, file_name) {
        return None;
    }

    let (raw_code, range) = find_status_token_at_position(position, document)?;

    if !STRICT_CODE_PATTERN.is_match(&raw_code) {
        return None;
    }

    let code: u16 = raw_code.parse().ok()?;
    let info = status::table().lookup(code)?;

    Some(Hover {
        contents: render_hover_markdown(info),
        range,
    })
}

/// Finds the status-code token whose span contains the cursor.
///
/// Returns the token text and its span. A cursor sitting immediately after
/// the last digit still counts as inside the span, matching how editors
/// treat word ranges.
pub fn find_status_token_at_position(
    position: Position,
    document: &str,
) -> Option<(String, Range)> {
    let line = document.lines().nth(position.line)?;
    let cursor_byte = char_to_byte(line, position.character)?;

    for found in STATUS_CODE_PATTERN.find_iter(line) {
        if found.start() <= cursor_byte && cursor_byte <= found.end() {
            let range = Range::new(
                Position::new(position.line, byte_to_char(line, found.start())),
                Position::new(position.line, byte_to_char(line, found.end())),
            );
            return Some((found.as_str().to_string(), range));
        }
    }

    None
}

/// Renders the tooltip body: bold title, description, MDN link.
fn render_hover_markdown(info: &StatusCodeInfo) -> String {
    format!(
        "**{}**\n\n{}\n\n[More Info]({})",
        info.title,
        info.description,
        info.docs_url()
    )
}

/// Byte offset of the `character`-th char of `line`. `None` when the
/// cursor lies beyond the end of the line.
fn char_to_byte(line: &str, character: usize) -> Option<usize> {
    if character == 0 {
        return Some(0);
    }
    line.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(line.len()))
        .nth(character)
}

/// Char offset of the byte index `byte` within `line`.
fn byte_to_char(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusCategory;

    fn hover_at(document: &str, line: usize, character: usize) -> Option<Hover> {
        provide_hover(
            Position::new(line, character),
            document,
            &FiletypeFilter::match_all(),
            "plaintext",
            "notes.txt",
        )
    }

    #[test]
    fn hover_on_known_code() {
        let hover = hover_at("Error 404 occurred", 0, 7).unwrap();
        assert!(hover.contents.contains("**404 Not Found**"));
        assert!(hover.contents.contains("cannot find the requested resource"));
        assert!(hover
            .contents
            .contains("[More Info](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404)"));
        assert_eq!(hover.range.start, Position::new(0, 6));
        assert_eq!(hover.range.end, Position::new(0, 9));
    }

    #[test]
    fn hover_at_token_edges() {
        // First digit and the boundary right after the last digit both count.
        assert!(hover_at("Error 404 occurred", 0, 6).is_some());
        assert!(hover_at("Error 404 occurred", 0, 9).is_some());
        assert!(hover_at("Error 404 occurred", 0, 5).is_none());
        assert!(hover_at("Error 404 occurred", 0, 10).is_none());
    }

    #[test]
    fn no_hover_inside_longer_number() {
        assert!(hover_at("id21000", 0, 4).is_none());
        assert!(hover_at("21000", 0, 2).is_none());
    }

    #[test]
    fn no_hover_inside_identifier() {
        assert!(hover_at("abc200xyz", 0, 4).is_none());
    }

    #[test]
    fn no_hover_for_unknown_code() {
        // 999 never matches the pattern; 419 matches but is not in the table.
        assert!(hover_at("HTTP 999", 0, 6).is_none());
        assert!(hover_at("HTTP 419", 0, 6).is_none());
    }

    #[test]
    fn hover_on_historical_306() {
        let hover = hover_at("status 306", 0, 8).unwrap();
        assert!(hover.contents.contains("**306 Switch Proxy**"));
        assert!(hover.contents.contains("Historical"));
    }

    #[test]
    fn hover_on_later_line_and_second_match() {
        let doc = "first line\nreturns 200 or 503 on overload";
        let hover = hover_at(doc, 1, 16).unwrap();
        assert!(hover.contents.contains("**503 Service Unavailable**"));
        assert_eq!(hover.range.start, Position::new(1, 15));
    }

    #[test]
    fn no_hover_past_end_of_document() {
        assert!(hover_at("200", 5, 0).is_none());
        assert!(hover_at("200", 0, 42).is_none());
    }

    #[test]
    fn filter_gate_suppresses_hover() {
        let filter = FiletypeFilter::from_setting(Some(&["py".to_string()]));
        let hover = provide_hover(Position::new(0, 1), "404", &filter, "rust", "main.rs");
        assert!(hover.is_none());

        let hover = provide_hover(Position::new(0, 1), "404", &filter, "python", "main.py");
        assert!(hover.is_some());
    }

    #[test]
    fn hover_after_multibyte_text() {
        // Char offsets, not byte offsets: the umlaut is one character.
        let hover = hover_at("f\u{00fc}r 404", 0, 5).unwrap();
        assert_eq!(hover.range.start, Position::new(0, 4));
        assert_eq!(hover.range.end, Position::new(0, 7));
    }

    #[test]
    fn rendered_markdown_shape() {
        let info = crate::status::table().lookup(451).unwrap();
        assert_eq!(info.category, StatusCategory::ClientError);
        let hover = hover_at("451", 0, 0).unwrap();
        let sections: Vec<&str> = hover.contents.split("\n\n").collect();
        assert_eq!(sections.len(), 3);
        assert!(sections[0].starts_with("**"));
        assert!(sections[2].starts_with("[More Info]("));
    }
}

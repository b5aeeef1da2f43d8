//! Inline bold markup used in result summaries.
//!
//! A bold span is text wrapped in paired `**` markers on a single line.
//! There is no escape for a literal `**`: a marker without a closing partner
//! on the same line stays in the plain text as written.

use serde::{Deserialize, Serialize};

const DELIMITER: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Bold(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Bold(text) => text,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Segment::Bold(_))
    }
}

/// Splits `input` into alternating plain and bold segments.
///
/// Every bold span is preceded by a plain segment and the sequence always
/// ends with a plain segment, so empty plain segments appear at the edges
/// and between adjacent spans.
pub fn parse_bold(input: &str) -> Vec<Segment> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor + DELIMITER.len() <= bytes.len() {
        if !bytes[cursor..].starts_with(DELIMITER.as_bytes()) {
            cursor += 1;
            continue;
        }

        let body_start = cursor + DELIMITER.len();
        match find_closing(input, body_start) {
            Some(body_end) => {
                segments.push(Segment::Plain(input[plain_start..cursor].to_string()));
                segments.push(Segment::Bold(input[body_start..body_end].to_string()));
                cursor = body_end + DELIMITER.len();
                plain_start = cursor;
            }
            // No partner on this line; retry one byte further like a regex scan would.
            None => cursor += 1,
        }
    }

    segments.push(Segment::Plain(input[plain_start..].to_string()));
    segments
}

/// Concatenated text of all segments, markers removed.
pub fn strip_markers(input: &str) -> String {
    parse_bold(input).iter().map(Segment::text).collect()
}

/// Characters a span may not cross.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn find_closing(input: &str, from: usize) -> Option<usize> {
    let rest = &input[from..];
    let line = match rest.find(|c: char| LINE_TERMINATORS.contains(&c)) {
        Some(end) => &rest[..end],
        None => rest,
    };
    line.find(DELIMITER).map(|offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment::Plain(text.to_string())
    }

    fn bold(text: &str) -> Segment {
        Segment::Bold(text.to_string())
    }

    #[test]
    fn test_single_span() {
        assert_eq!(
            parse_bold("Your **risk score** is high"),
            vec![plain("Your "), bold("risk score"), plain(" is high")]
        );
    }

    #[test]
    fn test_no_markup() {
        assert_eq!(parse_bold("nothing to see"), vec![plain("nothing to see")]);
        assert_eq!(parse_bold(""), vec![plain("")]);
    }

    #[test]
    fn test_keeps_empty_edge_segments() {
        assert_eq!(parse_bold("**all**"), vec![plain(""), bold("all"), plain("")]);
    }

    #[test]
    fn test_adjacent_spans() {
        assert_eq!(
            parse_bold("**a****b**"),
            vec![plain(""), bold("a"), plain(""), bold("b"), plain("")]
        );
    }

    #[test]
    fn test_spans_are_non_greedy() {
        assert_eq!(
            parse_bold("**one** and **two**!"),
            vec![plain(""), bold("one"), plain(" and "), bold("two"), plain("!")]
        );
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        assert_eq!(parse_bold("a ** b"), vec![plain("a ** b")]);
        assert_eq!(
            parse_bold("**x** then **dangling"),
            vec![plain(""), bold("x"), plain(" then **dangling")]
        );
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(parse_bold("a****b"), vec![plain("a"), bold(""), plain("b")]);
    }

    #[test]
    fn test_extra_asterisk_stays_inside_span() {
        assert_eq!(parse_bold("***a**"), vec![plain(""), bold("*a"), plain("")]);
    }

    #[test]
    fn test_span_does_not_cross_line_break() {
        assert_eq!(parse_bold("**a\nb**"), vec![plain("**a\nb**")]);
        assert_eq!(
            parse_bold("**a\n**b**"),
            vec![plain("**a\n"), bold("b"), plain("")]
        );
    }

    #[test]
    fn test_span_does_not_cross_other_line_terminators() {
        for text in ["**a\rb**", "**a\u{2028}b**", "**a\u{2029}b**", "**a\r\nb**"] {
            assert_eq!(parse_bold(text), vec![plain(text)], "{:?}", text);
        }
        assert_eq!(
            parse_bold("**a\r**b** c"),
            vec![plain("**a\r"), bold("b"), plain(" c")]
        );
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(
            parse_bold("Tu **puntuación** es álta"),
            vec![plain("Tu "), bold("puntuación"), plain(" es álta")]
        );
    }

    #[test]
    fn test_strip_markers_removes_only_matched_pairs() {
        assert_eq!(strip_markers("Your **risk score** is high"), "Your risk score is high");
        assert_eq!(strip_markers("**a** b **c"), "a b **c");
        assert_eq!(strip_markers("plain"), "plain");
    }
}

//! Source-annotated error reports.
//!
//! Input errors (a malformed JSON tree, an unreadable emitted file) are
//! rendered with ariadne against the offending text on stderr.

use std::ops::Range;
use std::path::Path;

use ariadne::{Config, Label, Report, ReportKind, Source};
use goscm_common::{LineIndex, Span};

#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    pub color: bool,
}

impl Reporter {
    pub fn error(&self, path: &Path, source: &str, span: Span, message: &str, label: &str) {
        let range = label_range(source, span);
        let config = Config::default().with_color(self.color);
        // stderr is the last channel; a failed write there has nowhere to go.
        let _ = Report::<Range<usize>>::build(ReportKind::Error, range.clone())
            .with_message(format!("{}: {message}", path.display()))
            .with_config(config)
            .with_label(Label::new(range).with_message(label))
            .finish()
            .eprint(Source::from(source));
    }
}

/// Non-empty range for a label, clamped to the source; zero-width spans
/// cover the next byte.
fn label_range(source: &str, span: Span) -> Range<usize> {
    let range = span.range();
    let start = range.start.min(source.len());
    let end = range.end.min(source.len()).max(start + 1);
    start..end
}

/// Position of a serde_json error, which reports line and column.
pub fn json_error_span(source: &str, err: &serde_json::Error) -> Span {
    Span::point(LineIndex::new(source).offset(err.line(), err.column()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_points_at_the_bad_token() {
        let source = "{\n  \"kind\": }";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let span = json_error_span(source, &err);
        assert!(source[span.start as usize..].starts_with('}'), "{span:?}");
    }

    #[test]
    fn labels_are_never_empty() {
        assert_eq!(label_range("abc", Span::point(1)), 1..2);
        assert_eq!(label_range("abc", Span::new(0, 3)), 0..3);
        assert_eq!(label_range("abc", Span::point(9)), 3..4);
    }

    #[test]
    fn labels_stop_at_the_end_of_the_source() {
        assert_eq!(label_range("abc", Span::new(1, 9)), 1..3);
        assert_eq!(label_range("", Span::new(0, 4)), 0..1);
    }
}

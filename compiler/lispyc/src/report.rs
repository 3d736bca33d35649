//! Parse error reports.
//!
//! Spans are byte offsets; ariadne counts characters, so ranges are
//! converted before labelling.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use lispy_parse::{ParseError, Span};

type ReportSpan<'a> = (&'a str, Range<usize>);

fn char_offset(source: &str, byte: usize) -> usize {
    source
        .get(..byte)
        .map_or_else(|| source.chars().count(), |prefix| prefix.chars().count())
}

fn char_range(source: &str, span: Span) -> Range<usize> {
    let range = span.to_range();
    char_offset(source, range.start)..char_offset(source, range.end)
}

fn primary_label(error: &ParseError) -> &'static str {
    match error {
        ParseError::UnexpectedChar { .. } => "not valid here",
        ParseError::UnclosedDelimiter { .. } => "never closed",
        ParseError::UnexpectedClose { .. } => "nothing to close",
        ParseError::MismatchedClose { .. } => "wrong closing delimiter",
        ParseError::SourceTooLarge(_) => "",
    }
}

/// Write a plain-text report for `error` in `source` (named `name`) to `w`.
pub fn write_parse_error(
    name: &str,
    source: &str,
    error: &ParseError,
    w: impl Write,
) -> io::Result<()> {
    let offset = error
        .span()
        .map_or(0, |span| char_offset(source, span.to_range().start));

    let mut report = Report::<ReportSpan<'_>>::build(ReportKind::Error, name, offset)
        .with_config(Config::default().with_color(false))
        .with_message(error.to_string());

    if let Some(span) = error.span() {
        report = report.with_label(
            Label::new((name, char_range(source, span))).with_message(primary_label(error)),
        );
    }
    if let Some(open) = error.related_span() {
        report = report.with_label(
            Label::new((name, char_range(source, open))).with_message("opened here"),
        );
    }

    report
        .finish()
        .write((name, Source::from(source.to_string())), w)
}

/// Render the report for `error` to a string.
pub fn render_parse_error(name: &str, source: &str, error: &ParseError) -> String {
    let mut buf = Vec::new();
    match write_parse_error(name, source, error, &mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("Error: {error}\n"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_char_offset_counts_characters() {
        assert_eq!(char_offset("abc", 2), 2);
        assert_eq!(char_offset("é(", 2), 1);
        assert_eq!(char_offset("ab", 10), 2);
    }

    #[test]
    fn test_report_mentions_message_and_labels() {
        let source = "(+ 1 2";
        let error = lispy_parse::parse(source).unwrap_err();
        let rendered = render_parse_error("<repl>", source, &error);
        assert!(rendered.contains("unclosed `(`"), "{rendered}");
        assert!(rendered.contains("never closed"), "{rendered}");
        assert!(rendered.contains("<repl>"), "{rendered}");
    }

    #[test]
    fn test_mismatched_close_points_at_opener() {
        let source = "(head {1 2)";
        let error = lispy_parse::parse(source).unwrap_err();
        let rendered = render_parse_error("t.lspy", source, &error);
        assert!(rendered.contains("opened here"), "{rendered}");
        assert!(rendered.contains("wrong closing delimiter"), "{rendered}");
    }

    #[test]
    fn test_report_after_multibyte_text() {
        let source = "(é";
        let error = lispy_parse::parse(source).unwrap_err();
        let rendered = render_parse_error("<repl>", source, &error);
        assert!(rendered.contains("unexpected character `é`"), "{rendered}");
    }
}

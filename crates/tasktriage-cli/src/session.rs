//! Line-oriented interactive session

use crate::config::OutputFormat;
use crate::output;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tasktriage_classifiers::{ClassificationHistory, Classifier};
use tracing::{debug, warn};

/// Classify each non-blank input line and record it
///
/// Blank lines are skipped with a warning. Bytes that are not valid UTF-8
/// are replaced rather than ending the session. At end of input the history
/// summary is written after the last result.
pub fn run<R: BufRead, W: Write>(
    classifier: &dyn Classifier,
    history: &mut ClassificationHistory,
    format: OutputFormat,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let mut line_no: usize = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!(line = line_no, "Replaced invalid UTF-8 in input line");
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if line.trim().is_empty() {
            warn!(line = line_no, "Skipping blank line");
            continue;
        }

        let result = classifier.classify(line)?;
        debug!(line = line_no, category = %result.primary_category, "Classified line");

        writeln!(out, "{}", output::render(&result, format)?)?;
        history.record(result);
    }

    write!(out, "{}", output::render_summary(history, format)?)?;
    if format == OutputFormat::Json {
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasktriage_classifiers::RuleClassifier;

    fn classifier() -> RuleClassifier {
        RuleClassifier::from_yaml(
            "session",
            "categories:\n  - id: bug\n    keywords: [bug]\n  - id: docs\n    keywords: [readme]\n",
        )
        .unwrap()
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "bug in parser\n\n   \nupdate the readme\nanother bug\n";
        let mut history = ClassificationHistory::new(10);
        let mut out = Vec::new();

        run(&classifier(), &mut history, OutputFormat::Text, input.as_bytes(), &mut out).unwrap();

        assert_eq!(history.len(), 3);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Recent classifications: 3"));
        assert_eq!(text.matches("Category:").count(), 3);
    }

    #[test]
    fn test_invalid_utf8_does_not_end_session() {
        let input: &[u8] = b"bug one\n\xff\xfe bug\nbug three\r\n";
        let mut history = ClassificationHistory::new(10);
        let mut out = Vec::new();

        run(&classifier(), &mut history, OutputFormat::Text, input, &mut out).unwrap();

        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|r| r.primary_category == "bug"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Recent classifications: 3"));
    }

    #[test]
    fn test_history_is_bounded() {
        let input = "bug\nreadme\nbug\nreadme\n";
        let mut history = ClassificationHistory::new(2);

        run(&classifier(), &mut history, OutputFormat::Json, input.as_bytes(), std::io::sink()).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().primary_category, "docs");
    }

    #[test]
    fn test_empty_input_prints_empty_summary() {
        let mut history = ClassificationHistory::default();
        let mut out = Vec::new();

        run(&classifier(), &mut history, OutputFormat::Text, "".as_bytes(), &mut out).unwrap();

        assert!(history.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "Recent classifications: 0\n");
    }
}

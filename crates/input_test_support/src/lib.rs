//! Shared helpers for text box integration tests.

pub mod scenarios;

/// Escape control characters and quotes so a frame prints on one line.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Describe the first difference between two frame listings.
///
/// Shows up to two lines of context on either side of the first mismatch.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    use std::fmt::Write;

    fn line_at(lines: &[String], i: usize) -> &str {
        lines.get(i).map_or("<missing>", String::as_str)
    }

    let max = expected.len().max(actual.len());
    let mut out = String::new();
    match (0..max).find(|&i| line_at(expected, i) != line_at(actual, i)) {
        Some(i) => {
            let start = i.saturating_sub(2);
            let end = (i + 3).min(max);
            let _ = writeln!(&mut out, "first mismatch at step {}:", i + 1);
            for step in start..end {
                let marker = if step == i { ">" } else { " " };
                let _ = writeln!(
                    &mut out,
                    "{marker} {:>4}  expected: {}",
                    step + 1,
                    line_at(expected, step)
                );
                let _ = writeln!(
                    &mut out,
                    "{marker} {:>4}    actual: {}",
                    step + 1,
                    line_at(actual, step)
                );
            }
        }
        None => {
            let _ = writeln!(&mut out, "no mismatching steps");
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} steps, actual {} steps",
        expected.len(),
        actual.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_keeps_frames_on_one_line() {
        assert_eq!(escape_text("a\"b"), "a\\\"b");
        assert_eq!(escape_text("x\u{1}y"), "x\\u{01}y");
        assert_eq!(escape_text("héllo"), "héllo");
    }

    #[test]
    fn diff_lines_points_at_first_mismatch() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string(), "c".to_string(), "d".to_string()];
        let report = diff_lines(&expected, &actual);
        assert!(report.contains("first mismatch at step 2"));
        assert!(report.contains("expected: <missing>"));
        assert!(report.contains("expected 2 steps, actual 3 steps"));
    }

    #[test]
    fn diff_lines_reports_truncated_actual_frames() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string()];
        let report = diff_lines(&expected, &actual);
        assert!(report.contains(">    2  expected: b"));
        assert!(report.contains(">    2    actual: <missing>"));

        let same = diff_lines(&expected, &expected);
        assert!(same.contains("no mismatching steps"));
    }
}

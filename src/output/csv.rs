//! CSV output, one quoted and padded row per input.

use super::Entry;
use crate::models::SubnetReport;
use std::fmt::Display;

pub const CSV_HEADER: &str = r#""cnt","input","network","broadcast","first_usable","penultimate_usable","hosts","mask","class","private","error""#;

/// Render the header and one row per entry.
pub fn render_csv(entries: &[Entry]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&csv_row(i + 1, &entry.input_text(), entry.outcome.as_ref().ok()));
        if let Err(e) = &entry.outcome {
            out.push_str(&format_field(format!("{}: {e}", e.kind()), 0));
        }
        out.push('\n');
    }
    out
}

/// One row up to the error column, which the caller appends.
fn csv_row(j: usize, input: &str, report: Option<&SubnetReport>) -> String {
    let cell = |value: Option<String>, width: usize| format_field(value.unwrap_or_default(), width);
    format!(
        r#"{j},{input},{network},{broadcast},{first},{penultimate},{hosts},{mask},{class},{private},"#,
        j = format_field(j, 6),
        input = format_field(escape_quotes(input), 20),
        network = cell(report.map(|r| r.network.to_string()), 17),
        broadcast = cell(report.map(|r| r.broadcast.to_string()), 17),
        first = cell(report.map(|r| r.first_usable.clone()), 17),
        penultimate = cell(report.map(|r| r.penultimate_usable.clone()), 17),
        hosts = cell(report.map(|r| r.usable_hosts.to_string()), 12),
        mask = cell(report.map(|r| r.subnet_mask.to_string()), 17),
        class = cell(report.and_then(|r| r.class).map(|c| c.to_string()), 3),
        private = cell(report.map(|r| r.private.to_string()), 7),
    )
}

/// Quote `value` and right-align it to at least `width` characters.
pub fn format_field<T: Display>(value: T, width: usize) -> String {
    format!("{:>width$}", format!("\"{value}\""))
}

fn escape_quotes(input: &str) -> String {
    input.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, CidrError};
    use serde_json::json;

    #[test]
    fn test_render_csv() {
        let entries = vec![
            Entry {
                input: json!("91.124.230.205/30"),
                outcome: analyze("91.124.230.205/30"),
            },
            Entry {
                input: json!("230.248.10.10"),
                outcome: Err(CidrError::MissingPrefix),
            },
        ];
        let out = render_csv(&entries);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            r#"   "1", "91.124.230.205/30", "91.124.230.204", "91.124.230.207", "91.124.230.205", "91.124.230.205",         "2","255.255.255.252","A","false","#
        );
        assert!(lines[2].starts_with(r#"   "2",     "230.248.10.10","#));
        assert!(lines[2].ends_with(
            r#""MissingPrefix: missing prefix length, expected A.B.C.D/P""#
        ));
    }

    #[test]
    fn test_format_field_padding() {
        let cases = [
            ("test", 10, r#"    "test""#),
            ("test", 6, r#""test""#),
            ("long_value", 5, r#""long_value""#),
            ("", 0, "\"\""),
        ];
        for (value, width, expected) in cases {
            assert_eq!(format_field(value, width), expected, "{value:?} width {width}");
        }
        assert_eq!(format_field(42, 6), r#"  "42""#);
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"a"b"#), r#"a""b"#);
    }
}

//! JSON output with a generation timestamp.

use super::Entry;
use crate::models::SubnetReport;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;

#[derive(Serialize)]
struct JsonOutput<'a> {
    /// RFC 3339 UTC time the output was produced.
    generated: String,
    entries: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    input: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a SubnetReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    kind: &'static str,
    message: String,
}

/// Pretty JSON object with a `generated` timestamp and one entry per input.
pub fn render_json(entries: &[Entry]) -> Result<String, Box<dyn Error>> {
    let output = JsonOutput {
        generated: chrono::Utc::now().to_rfc3339(),
        entries: entries
            .iter()
            .map(|entry| JsonEntry {
                input: &entry.input,
                report: entry.outcome.as_ref().ok(),
                error: entry.outcome.as_ref().err().map(|e| JsonError {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            })
            .collect(),
    };
    let json =
        serde_json::to_string_pretty(&output).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, analyze_value};
    use serde_json::json;

    #[test]
    fn test_render_json() {
        let entries = vec![
            Entry {
                input: json!("172.27.230.205/30"),
                outcome: analyze("172.27.230.205/30"),
            },
            Entry {
                input: json!([1, 2]),
                outcome: analyze_value(&json!([1, 2])),
            },
        ];
        let out = render_json(&entries).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert!(chrono::DateTime::parse_from_rfc3339(value["generated"].as_str().unwrap()).is_ok());
        let first = &value["entries"][0];
        assert_eq!(first["input"], "172.27.230.205/30");
        assert_eq!(first["report"]["network"], "172.27.230.204");
        assert_eq!(first["report"]["class"], "B");
        assert_eq!(first["report"]["private"], true);
        assert!(first.get("error").is_none());

        let second = &value["entries"][1];
        assert_eq!(second["input"], json!([1, 2]));
        assert_eq!(second["error"]["kind"], "InvalidType");
        assert!(second.get("report").is_none());
    }
}

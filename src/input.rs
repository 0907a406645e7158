//! Reading CIDR inputs from files.
//!
//! `.json` files hold an array of values; anything that is not a string is kept
//! and reported later as an invalid type. Other files are plain text.

use regex::Regex;
use serde_json::Value;
use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

/// Regex for one token of a plain text input: anything up to whitespace, `,` or `;`.
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"[^\s,;]+").expect("Invalid Regex"))
}

/// Read all inputs from `path`, choosing the parser by extension.
pub fn read_inputs(path: &Path) -> Result<Vec<Value>, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Input file does not exist: {}", path.display()).into());
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading input file {}: {e}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let inputs = if is_json {
        parse_json_inputs(&text)?
    } else {
        parse_text_inputs(&text)
    };
    log::info!("Read {} inputs from {}", inputs.len(), path.display());
    Ok(inputs)
}

/// Parse a JSON array of arbitrary values.
pub fn parse_json_inputs(text: &str) -> Result<Vec<Value>, Box<dyn Error>> {
    let deserializer = &mut serde_json::Deserializer::from_str(text);
    let inputs: Vec<Value> = serde_path_to_error::deserialize(deserializer).map_err(|e| {
        format!(
            "Error parsing input JSON at {path}: {inner}",
            path = e.path(),
            inner = e.inner()
        )
    })?;
    Ok(inputs)
}

/// Split plain text into string inputs. Everything from `#` to the end of a line is a comment.
pub fn parse_text_inputs(text: &str) -> Vec<Value> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(content, _)| content))
        .flat_map(|line| get_token_regex().find_iter(line))
        .map(|m| Value::String(m.as_str().to_string()))
        .collect()
}

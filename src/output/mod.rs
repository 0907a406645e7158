//! Output formatting for calculator results.
//!
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{format_field, render_csv, CSV_HEADER};
pub use json::render_json;
pub use terminal::render_terminal;

use crate::config::OutputFormat;
use crate::error::CidrError;
use crate::models::SubnetReport;
use serde_json::Value;
use std::error::Error;

/// One input and what the calculator made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub input: Value,
    pub outcome: Result<SubnetReport, CidrError>,
}

impl Entry {
    /// The input as shown in reports; strings without their JSON quotes.
    pub fn input_text(&self) -> String {
        match &self.input {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Render `entries` in the requested format.
pub fn render(format: OutputFormat, entries: &[Entry]) -> Result<String, Box<dyn Error>> {
    log::debug!("render() format={format} entries={}", entries.len());
    match format {
        OutputFormat::Terminal => Ok(render_terminal(entries)),
        OutputFormat::Csv => Ok(render_csv(entries)),
        OutputFormat::Json => render_json(entries),
    }
}

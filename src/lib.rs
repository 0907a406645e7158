//! IPv4 CIDR calculator.
//!
//! Derives binary renderings, network and broadcast addresses, usable range,
//! host count, class and private scope from an `A.B.C.D/P` string.
//!
//! ```
//! use ip_calc::{analyze, IpClass};
//! let report = analyze("91.124.230.205/30").unwrap();
//! assert_eq!(report.network.to_string(), "91.124.230.204");
//! assert_eq!(report.usable_hosts, 2);
//! assert_eq!(report.class, Some(IpClass::A));
//! ```

pub mod config;
pub mod error;
pub mod input;
mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{Config, OutputFormat};
pub use error::CidrError;
pub use logging::init_logging;
pub use models::{CidrAddress, IpClass, SubnetReport};
pub use processing::{
    binary_mask_from_raw, broadcast_address, combine_binary, extract_address,
    extract_prefix_length, first_usable_address, from_binary, ip_class, is_private,
    network_address, penultimate_usable_address, to_binary_mask, to_binary_octets,
    to_inverted_mask, usable_host_count, validate, validate_value, BitOp,
};

use output::Entry;
use serde_json::Value;
use std::error::Error;

/// Validate `raw` and derive every subnet fact from it.
pub fn analyze(raw: &str) -> Result<SubnetReport, CidrError> {
    let cidr: CidrAddress = raw.parse()?;
    log::debug!("analyze({raw}) parsed {cidr}");
    Ok(SubnetReport::from(cidr))
}

/// Like [`analyze`], for input that may not be a string.
pub fn analyze_value(value: &Value) -> Result<SubnetReport, CidrError> {
    match value {
        Value::String(raw) => analyze(raw),
        _ => Err(CidrError::InvalidType),
    }
}

/// Rendered output and counts from one [`run`].
#[derive(Debug)]
pub struct RunOutput {
    pub rendered: String,
    pub valid: usize,
    pub invalid: usize,
}

/// Analyze every address from `config` and render the results.
pub fn run(config: &Config) -> Result<RunOutput, Box<dyn Error>> {
    log::info!("#Start run() format={}", config.format);

    let mut inputs: Vec<Value> = config
        .addresses
        .iter()
        .map(|a| Value::String(a.clone()))
        .collect();
    if let Some(path) = &config.input_file {
        inputs.extend(input::read_inputs(path)?);
    }
    if inputs.is_empty() {
        return Err("No addresses to analyze".into());
    }

    let entries: Vec<Entry> = inputs
        .into_iter()
        .map(|input| {
            let outcome = analyze_value(&input);
            if let Err(e) = &outcome {
                log::warn!("Invalid input {input}: {e}");
            }
            Entry { input, outcome }
        })
        .collect();

    let invalid = entries.iter().filter(|e| e.outcome.is_err()).count();
    let valid = entries.len() - invalid;
    let rendered = output::render(config.format, &entries)?;

    log::info!("#End run() valid={valid} invalid={invalid}");
    Ok(RunOutput {
        rendered,
        valid,
        invalid,
    })
}

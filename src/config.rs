//! Runtime configuration from environment and command-line arguments.
//!
//! `main` loads `.env` with `dotenv` first; arguments override the environment.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const ENV_FORMAT: &str = "IP_CALC_FORMAT";
pub const ENV_INPUT_FILE: &str = "IP_CALC_INPUT_FILE";
pub const ENV_LOG_CONFIG: &str = "IP_CALC_LOG_CONFIG";

/// How reports are rendered on stdout.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ip-calc", version)]
#[command(about = "Derive network, broadcast, usable range, class and scope from IPv4 CIDR strings")]
pub struct Config {
    /// Output format
    #[arg(long, env = "IP_CALC_FORMAT", value_enum, ignore_case = true, default_value_t)]
    pub format: OutputFormat,

    /// File of addresses (.json array or plain text), read after the CIDR arguments
    #[arg(long = "file", env = "IP_CALC_INPUT_FILE", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// log4rs YAML file; warnings go to stderr when it does not exist
    #[arg(
        long,
        env = "IP_CALC_LOG_CONFIG",
        value_name = "PATH",
        default_value = "log4rs.yml"
    )]
    pub log_config: PathBuf,

    /// Addresses to analyze, e.g. 91.124.230.205/30
    #[arg(value_name = "CIDR", required_unless_present = "input_file")]
    pub addresses: Vec<String>,
}

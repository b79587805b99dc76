use clap::Parser;
use std::time::Duration;

use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_usize, parse_request_count,
};
use super::types::{OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator - spreads a fixed number of GET requests across parallel workers and reports status codes, network errors, and throughput."
)]
pub struct TesterArgs {
    /// URL of the service to be tested
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of requests
    #[arg(
        long,
        short = 'n',
        default_value = "100",
        value_parser = parse_request_count
    )]
    pub requests: usize,

    /// Number of simultaneous workers
    #[arg(
        long,
        short = 'c',
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "30s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Report format printed after the run
    #[arg(long = "output-format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Enable verbose logging (sets log level to debug unless overridden by STRESSTEST_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./stresstest.toml or ./stresstest.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::TesterArgs;
pub(crate) use defaults::DEFAULT_CONFIG_FILES;
pub use defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUEST_TIMEOUT, DEFAULT_REQUESTS};
pub use parsers::parse_duration_arg;
pub use types::{OutputFormat, PositiveUsize};

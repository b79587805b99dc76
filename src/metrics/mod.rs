//! Request outcomes and their aggregation into a run report.
mod aggregator;
mod types;


pub use aggregator::{Aggregator, aggregate, fold_outcomes};
pub use types::{Report, RequestOutcome};

//! Run-level domain types shared by the dispatcher and the entry point.
mod run;

pub use run::LoadTestConfig;

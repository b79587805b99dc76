//! Core library for the `stresstest` CLI.
//!
//! A run splits a fixed number of GET requests across parallel workers, each
//! owning its own HTTP client. Workers report one outcome per request over a
//! single channel; once every worker has finished, the outcomes are folded
//! into a [`metrics::Report`]. The binary adds argument parsing, config
//! files, logging, and console output on top.
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
pub mod report;

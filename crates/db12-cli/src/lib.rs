//! # db12-cli
//!
//! Stdout formatting, JSON reports, and shell completion.

pub mod completion;
pub mod output;

pub use output::{format_aggregate, write_json, JsonReport};

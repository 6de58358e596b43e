//! kanasort CLI library
//!
//! This library provides the command-line interface for sorting and
//! grouping business-card JSON files in gojūon order.

pub mod commands;
pub mod config;
pub mod dictionary_source;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

//! Command-line interface
//!
//! The binary is a thin consumer of the domain model: the `demo`
//! subcommand seeds a manager with the sample data set, walks it through
//! assignments and status changes, and prints the report set.
//!
//! All commands support `--format text|json` and `--verbose` for debug
//! output on stderr. Call [`run()`] to parse arguments and execute.

mod app;
mod demo;
mod output;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};

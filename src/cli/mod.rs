//! # Command-Line Interface
//!
//! Report driver and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `report` (default) | Self-check, then print the sample catalog |
//! | `check` | Run the self-check battery only |
//! | `kinds` | List kind tags and display labels |
//!
//! `report --pass describe|measure|area|all` selects which passes to print.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output, colored on a terminal
//! - `json` - Machine-parseable JSON
//!
//! Use `--no-color` (or set `NO_COLOR`) to disable escape sequences and
//! `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod art;
mod output;
mod report;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use report::ReportPass;

//! Presentation layer for ha-provision
//!
//! This crate contains CLI definitions, the terminal prompt, output
//! formatters and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use output::{console::ConsoleFormatter, printer::StdoutPrinter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use prompt::{LinePrompt, TerminalPrompt};

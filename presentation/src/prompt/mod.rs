//! Interactive prompts for missing configuration values

pub mod terminal;

pub use terminal::{LinePrompt, TerminalPrompt};

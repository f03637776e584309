//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for command summaries
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored console output (default)
    #[default]
    Text,
    /// JSON output
    Json,
}

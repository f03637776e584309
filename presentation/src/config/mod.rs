//! Presentation-level configuration
//!
//! Merges the `[output]` config section with command-line flags.

use provision_domain::OutputFormat;

/// Output settings after CLI flags have been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// A format flag overrides the configured one.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        if quiet {
            self.show_progress = false;
        }
        self
    }

    /// Applies the color setting to every `colored` string in the process.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Progress lines share stdout with the summary, so JSON runs stay silent.
    pub fn progress_enabled(&self) -> bool {
        self.show_progress && !self.is_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_format() {
        let config = OutputConfig::default().with_format(Some(OutputFormat::Json));
        assert!(config.is_json());
        let config = config.with_format(None);
        assert!(config.is_json());
    }

    #[test]
    fn test_quiet_hides_progress() {
        assert!(OutputConfig::default().quiet(false).show_progress);
        assert!(!OutputConfig::default().quiet(true).show_progress);
    }

    #[test]
    fn test_json_disables_progress() {
        let config = OutputConfig::default().with_format(Some(OutputFormat::Json));
        assert!(config.show_progress);
        assert!(!config.progress_enabled());
    }
}

//! Console output formatter for resolve, render and apply results

use colored::Colorize;
use provision_application::{ApplyOutput, ArtifactSummary, RenderOutput};
use provision_domain::{ConfigKeyInfo, ResolvedValues, known_keys};
use serde::Serialize;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Resolved values with their source; secrets masked
    pub fn format_resolved(values: &ResolvedValues) -> String {
        let mut output = Self::section_header("Resolved values");
        let width = values.iter().map(|v| v.key.env_name().len()).max().unwrap_or(0);
        for value in values.iter() {
            output.push_str(&format!(
                "  {:<width$}  {}  {}\n",
                value.key.env_name(),
                Self::quote(value.display_value()),
                format!("[{}]", value.source).dimmed(),
                width = width
            ));
        }
        output
    }

    /// Written (or, for dry runs, rendered) artifacts
    pub fn format_render(result: &RenderOutput) -> String {
        let mut output = Self::header("Rendered artifacts");
        output.push('\n');
        for artifact in &result.artifacts {
            output.push_str(&Self::artifact_line(artifact));
        }
        output.push_str(&Self::footer());
        output
    }

    pub fn format_apply(result: &ApplyOutput, dry_run: bool) -> String {
        let title = if dry_run {
            "Provision plan (dry run)"
        } else {
            "Provision complete"
        };
        let mut output = Self::header(title);
        output.push('\n');

        output.push_str(&Self::section_header("Artifacts"));
        for artifact in &result.render.artifacts {
            output.push_str(&Self::artifact_line(artifact));
        }

        output.push_str(&Self::section_header("Commands"));
        for (i, command) in result.commands.iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. {}\n      {}\n",
                i + 1,
                command.description.bold(),
                command.to_string().dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Key registry, with the current value's origin when known
    pub fn format_keys(keys: &[ConfigKeyInfo]) -> String {
        let mut output = Self::section_header("Configuration keys");
        let width = keys.iter().map(|k| k.env.len()).max().unwrap_or(0);
        for key in keys {
            let kind = match key.default {
                Some(default) => format!("default {}", default),
                None => "required".to_string(),
            };
            let secret = if key.secret { " secret" } else { "" };
            output.push_str(&format!(
                "  {:<width$}  {}\n  {:<width$}  {}\n",
                key.env.cyan(),
                key.description,
                "",
                format!("({}{})", kind, secret).dimmed(),
                width = width
            ));
        }
        output
    }

    /// All registry keys, for `keys`
    pub fn format_known_keys() -> String {
        Self::format_keys(known_keys())
    }

    /// Pretty JSON for any result type
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// JSON document with the resolved values (secrets masked) and a result.
    pub fn format_json_report<T: Serialize>(values: &ResolvedValues, result: &T) -> String {
        Self::format_json(&serde_json::json!({
            "values": values,
            "result": result,
        }))
    }

    fn artifact_line(artifact: &ArtifactSummary) -> String {
        let private = if artifact.private {
            format!(" {}", "(0600)".yellow())
        } else {
            String::new()
        };
        format!(
            "  {} {:<18} {} {}{}\n",
            "v".green(),
            artifact.kind.label(),
            artifact.path.display(),
            format!("{} bytes", artifact.bytes).dimmed(),
            private
        )
    }

    fn quote(value: &str) -> String {
        if value.is_empty() {
            "\"\"".dimmed().to_string()
        } else {
            value.to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provision_domain::{ArtifactKind, ConfigKey, HostCommand};
    use std::path::PathBuf;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn render_output() -> RenderOutput {
        RenderOutput {
            artifacts: vec![
                ArtifactSummary {
                    kind: ArtifactKind::ComposeManifest,
                    path: PathBuf::from("/srv/stack/docker-compose.yml"),
                    bytes: 120,
                    private: true,
                },
                ArtifactSummary {
                    kind: ArtifactKind::KeepalivedConfig,
                    path: PathBuf::from("/etc/keepalived/keepalived.conf"),
                    bytes: 200,
                    private: false,
                },
            ],
        }
    }

    #[test]
    fn test_format_resolved_masks_secrets() {
        no_color();
        let values = ResolvedValues::new()
            .with(ConfigKey::DbUser, "svc")
            .with(ConfigKey::DbUserPass, "hunter2")
            .with(ConfigKey::PeerIps, "");
        let text = ConsoleFormatter::format_resolved(&values);
        assert!(text.contains("svc"));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("********"));
        assert!(text.contains("[env]"));
        assert!(text.contains("\"\""));
    }

    #[test]
    fn test_format_render_lists_paths() {
        no_color();
        let text = ConsoleFormatter::format_render(&render_output());
        assert!(text.contains("/srv/stack/docker-compose.yml"));
        assert!(text.contains("120 bytes"));
        assert_eq!(text.matches("(0600)").count(), 1);
    }

    #[test]
    fn test_format_apply_numbers_commands() {
        no_color();
        let output = ApplyOutput {
            render: render_output(),
            commands: vec![
                HostCommand::new("apt-get", "Refresh package index").arg("update"),
            ],
        };
        let text = ConsoleFormatter::format_apply(&output, true);
        assert!(text.contains("dry run"));
        assert!(text.contains(" 1. Refresh package index"));
        assert!(text.contains("apt-get update"));
    }

    #[test]
    fn test_format_known_keys() {
        no_color();
        let text = ConsoleFormatter::format_known_keys();
        assert!(text.contains("HOST_IP"));
        assert!(text.contains("default eth0"));
        assert!(text.contains("required secret"));
    }

    #[test]
    fn test_format_json_report_masks_secrets() {
        let values = ResolvedValues::new()
            .with(ConfigKey::HostIp, "10.0.0.2")
            .with(ConfigKey::DbRootPass, "rootpw");
        let json = ConsoleFormatter::format_json_report(&values, &render_output());
        assert!(!json.contains("rootpw"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["values"][0]["key"], "HOST_IP");
        assert_eq!(parsed["values"][1]["value"], "********");
        assert_eq!(parsed["result"]["artifacts"][0]["bytes"], 120);
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&render_output());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["artifacts"][0]["kind"], "compose_manifest");
        assert_eq!(parsed["artifacts"][1]["private"], false);
    }
}

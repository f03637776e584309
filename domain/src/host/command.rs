//! External command value object

use serde::Serialize;

/// A program invocation. Arguments are passed as-is, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Short human-readable description for progress output.
    pub description: String,
}

impl HostCommand {
    pub fn new(program: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Shell-like rendering, for display only.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(|part| {
                if part.is_empty() || part.contains(char::is_whitespace) {
                    format!("'{}'", part)
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for HostCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let cmd = HostCommand::new("systemctl", "Restart keepalived")
            .args(["restart", "keepalived"]);
        assert_eq!(cmd.command_line(), "systemctl restart keepalived");
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        let cmd = HostCommand::new("docker", "x").arg("-f").arg("/my stack/compose.yml");
        assert_eq!(cmd.to_string(), "docker -f '/my stack/compose.yml'");
    }
}

//! Line-based prompt for missing configuration values.
//!
//! The operator sees one question per missing key, on stderr:
//!
//! ```text
//! Galera cluster name (CLUSTER_NAME): _
//! MariaDB root password (DB_ROOT_PASS, input is shown): _
//! ```
//!
//! Whatever is typed is taken as-is, an empty line included.

use colored::Colorize;
use provision_application::{PromptError, PromptPort};
use provision_domain::ConfigKeyInfo;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::sync::Mutex;

/// Prompt over any line reader / writer pair.
pub struct LinePrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
    interactive: bool,
}

/// Prompt on the process terminal.
pub type TerminalPrompt = LinePrompt<Box<dyn BufRead + Send>, Box<dyn Write + Send>>;

#[cfg(unix)]
const CONTROLLING_TTY: &str = "/dev/tty";
#[cfg(not(unix))]
const CONTROLLING_TTY: &str = "CON";

impl TerminalPrompt {
    /// Stdin when it is a terminal, else the controlling terminal (so piped
    /// or redirected input still gets prompts). Non-interactive only when
    /// there is no terminal at all.
    pub fn stdio() -> Self {
        if io::stdin().is_terminal() {
            return Self::new(
                Box::new(io::BufReader::new(io::stdin())),
                Box::new(io::stderr()),
                true,
            );
        }
        Self::open_terminal(Path::new(CONTROLLING_TTY))
    }

    fn open_terminal(tty: &Path) -> Self {
        // Separate handles; the writer appends so it never moves the read offset
        let opened = File::open(tty).and_then(|reader| {
            let writer = OpenOptions::new().append(true).open(tty)?;
            Ok((reader, writer))
        });
        match opened {
            Ok((reader, writer)) => {
                Self::new(Box::new(io::BufReader::new(reader)), Box::new(writer), true)
            }
            Err(_) => Self::new(Box::new(io::empty()), Box::new(io::sink()), false),
        }
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
            interactive,
        }
    }

    fn question(key: &ConfigKeyInfo) -> String {
        let hint = if key.secret {
            format!("{}, input is shown", key.env)
        } else {
            key.env.to_string()
        };
        format!("{} ({}): ", key.description.bold(), hint.dimmed())
    }

    #[cfg(test)]
    fn into_output(self) -> Option<W> {
        self.output.into_inner().ok()
    }
}

impl<R, W> PromptPort for LinePrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn prompt(&self, key: &ConfigKeyInfo) -> Result<String, PromptError> {
        {
            let mut out = self
                .output
                .lock()
                .map_err(|e| PromptError::IoError(e.to_string()))?;
            out.write_all(Self::question(key).as_bytes())
                .and_then(|_| out.flush())
                .map_err(|e| PromptError::IoError(e.to_string()))?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .map_err(|e| PromptError::IoError(e.to_string()))?
            .read_line(&mut line)
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        if read == 0 {
            return Err(PromptError::Closed(key.env));
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

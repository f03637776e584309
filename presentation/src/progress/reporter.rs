//! Progress reporting for render and apply runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use provision_application::ProvisionProgress;
use provision_domain::{HostCommand, RenderedArtifact};
use std::sync::Mutex;

/// Reports progress with a single step bar.
///
/// Meant for runs where no child process writes to the terminal
/// (render, `apply --dry-run`); see [`SimpleProgress`] otherwise.
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, total: usize, f: impl FnOnce(&ProgressBar)) {
        if let Ok(mut slot) = self.bar.lock() {
            let bar = slot.get_or_insert_with(|| {
                let pb = ProgressBar::new(total as u64);
                pb.set_style(Self::bar_style());
                pb.set_prefix("Provision");
                pb
            });
            f(bar);
        }
    }

    /// Clear the bar once the run is over.
    pub fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionProgress for ProgressReporter {
    fn on_artifact_written(&self, artifact: &RenderedArtifact) {
        let line = format!(
            "  {} {} {}",
            "v".green(),
            artifact.kind.label(),
            artifact.path.display().to_string().dimmed()
        );
        if let Ok(slot) = self.bar.lock() {
            match slot.as_ref() {
                Some(pb) => pb.println(line),
                None => println!("{}", line),
            }
        }
    }

    fn on_command_start(&self, command: &HostCommand, index: usize, total: usize) {
        self.with_bar(total, |pb| {
            pb.set_position(index.saturating_sub(1) as u64);
            pb.set_message(command.description.clone());
        });
    }

    fn on_command_complete(&self, command: &HostCommand, success: bool) {
        self.with_bar(0, |pb| {
            let mark = if success { "v".green() } else { "x".red() };
            pb.println(format!("  {} {}", mark, command));
            pb.inc(1);
        });
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProvisionProgress for SimpleProgress {
    fn on_artifact_written(&self, artifact: &RenderedArtifact) {
        println!(
            "  {} {} {}",
            "v".green(),
            artifact.kind.label(),
            artifact.path.display().to_string().dimmed()
        );
    }

    fn on_command_start(&self, command: &HostCommand, index: usize, total: usize) {
        println!(
            "{} [{}/{}] {} {}",
            "->".cyan(),
            index,
            total,
            command.description.bold(),
            format!("({})", command).dimmed()
        );
    }

    fn on_command_complete(&self, command: &HostCommand, success: bool) {
        if !success {
            println!("  {} {} (failed)", "x".red(), command.description);
        }
    }
}

//! Provisioning plan: packages before rendering, services after.

use super::command::HostCommand;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inputs of the plan that are not configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOptions {
    pub packages: Vec<String>,
    pub compose_file: PathBuf,
    pub compose_project: String,
    /// Account whose `syncthing@<user>` unit runs the sync daemon.
    pub syncthing_user: String,
}

/// The ordered host commands around the render step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionPlan {
    /// Run before any artifact is written.
    pub install: Vec<HostCommand>,
    /// Run after every artifact is written.
    pub start: Vec<HostCommand>,
}

impl ProvisionPlan {
    pub fn build(options: &PlanOptions) -> Self {
        let mut install = Vec::new();
        if !options.packages.is_empty() {
            install.push(
                HostCommand::new("apt-get", "Refresh package index").arg("update"),
            );
            install.push(
                HostCommand::new("apt-get", "Install packages")
                    .args(["install", "-y"])
                    .args(options.packages.iter().cloned()),
            );
        }

        let syncthing_unit = format!("syncthing@{}", options.syncthing_user);
        let start = vec![
            HostCommand::new("docker", "Start database and proxy containers")
                .arg("compose")
                .arg("-p")
                .arg(options.compose_project.clone())
                .arg("-f")
                .arg(options.compose_file.display().to_string())
                .args(["up", "-d"]),
            HostCommand::new("systemctl", "Enable keepalived").args(["enable", "keepalived"]),
            HostCommand::new("systemctl", "Restart keepalived").args(["restart", "keepalived"]),
            HostCommand::new("systemctl", "Enable syncthing")
                .arg("enable")
                .arg(syncthing_unit.clone()),
            HostCommand::new("systemctl", "Restart syncthing")
                .arg("restart")
                .arg(syncthing_unit),
        ];

        Self { install, start }
    }

    pub fn len(&self) -> usize {
        self.install.len() + self.start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Provision parameters: `apply` flow settings that are not inputs.

use provision_domain::{PlanOptions, StackLayout};
use serde::{Deserialize, Serialize};

/// Distribution packages installed before rendering.
pub const DEFAULT_PACKAGES: [&str; 4] = ["keepalived", "syncthing", "docker.io", "docker-compose-v2"];

/// Settings for [`ApplyProvisionUseCase`](crate::use_cases::apply_provision::ApplyProvisionUseCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionParams {
    /// Packages to install; empty skips the install step.
    pub packages: Vec<String>,
    /// Compose project name (`docker compose -p`).
    pub compose_project: String,
    /// Owner of the `syncthing@<user>` unit.
    pub syncthing_user: String,
}

impl Default for ProvisionParams {
    fn default() -> Self {
        Self {
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            compose_project: "npm".to_string(),
            syncthing_user: "root".to_string(),
        }
    }
}

impl ProvisionParams {
    // ==================== Builder Methods ====================

    pub fn with_packages(mut self, packages: Vec<String>) -> Self {
        self.packages = packages;
        self
    }

    pub fn with_compose_project(mut self, project: impl Into<String>) -> Self {
        self.compose_project = project.into();
        self
    }

    pub fn with_syncthing_user(mut self, user: impl Into<String>) -> Self {
        self.syncthing_user = user.into();
        self
    }

    /// Plan inputs for the given layout.
    pub fn plan_options(&self, layout: &StackLayout) -> PlanOptions {
        PlanOptions {
            packages: self.packages.clone(),
            compose_file: layout.compose_file(),
            compose_project: self.compose_project.clone(),
            syncthing_user: self.syncthing_user.clone(),
        }
    }
}

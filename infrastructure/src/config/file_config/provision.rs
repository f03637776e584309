//! Provision configuration from TOML (`[provision]` section)

use provision_application::ProvisionParams;
use serde::{Deserialize, Serialize};

/// Raw provision configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvisionConfig {
    /// Packages installed by `apply` (empty list skips installation)
    pub packages: Vec<String>,
    /// Compose project name
    pub compose_project: String,
    /// User owning the `syncthing@<user>` unit
    pub syncthing_user: String,
}

impl Default for FileProvisionConfig {
    fn default() -> Self {
        let params = ProvisionParams::default();
        Self {
            packages: params.packages,
            compose_project: params.compose_project,
            syncthing_user: params.syncthing_user,
        }
    }
}

impl FileProvisionConfig {
    pub fn to_params(&self) -> ProvisionParams {
        ProvisionParams::default()
            .with_packages(self.packages.clone())
            .with_compose_project(self.compose_project.clone())
            .with_syncthing_user(self.syncthing_user.clone())
    }
}

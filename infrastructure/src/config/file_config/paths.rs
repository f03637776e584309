//! Paths configuration from TOML (`[paths]` section)

use provision_domain::StackLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw paths configuration from TOML
///
/// Relative paths are resolved against the current directory when the
/// layout is built, so the rendered files only carry absolute paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePathsConfig {
    /// Directory for the compose manifest and the MariaDB mounts
    pub stack_dir: PathBuf,
    /// Proxy data directory (default: `<stack_dir>/data`)
    pub app_data_dir: Option<PathBuf>,
    /// Keepalived config file
    pub keepalived_config: PathBuf,
    /// Syncthing config file (default: `<config dir>/syncthing/config.xml`)
    pub syncthing_config: Option<PathBuf>,
}

impl Default for FilePathsConfig {
    fn default() -> Self {
        Self {
            stack_dir: PathBuf::from("."),
            app_data_dir: None,
            keepalived_config: PathBuf::from("/etc/keepalived/keepalived.conf"),
            syncthing_config: None,
        }
    }
}

impl FilePathsConfig {
    /// Build the absolute layout. `stack_dir` overrides the configured one.
    pub fn layout(&self, stack_dir: Option<&Path>) -> std::io::Result<StackLayout> {
        let stack_dir = std::path::absolute(stack_dir.unwrap_or(&self.stack_dir))?;
        let mut layout = StackLayout::new(stack_dir);

        if let Some(dir) = &self.app_data_dir {
            layout.app_data_dir = std::path::absolute(dir)?;
        }
        layout.keepalived_config = std::path::absolute(&self.keepalived_config)?;
        layout.syncthing_config = match &self.syncthing_config {
            Some(path) => std::path::absolute(path)?,
            None => Self::default_syncthing_config().unwrap_or(layout.syncthing_config),
        };

        Ok(layout)
    }

    /// `$XDG_CONFIG_HOME/syncthing/config.xml` (or `~/.config/...`)
    pub fn default_syncthing_config() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("syncthing").join("config.xml"))
    }
}

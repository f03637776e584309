//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "ha-provision";
const PROJECT_FILES: [&str; 2] = ["ha-provision.toml", ".ha-provision.toml"];
const ENV_PREFIX: &str = "HA_PROVISION_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `HA_PROVISION_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ha-provision.toml` or `./.ha-provision.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/ha-provision/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config file (first name found)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/ha-provision/config.toml if set,
    /// otherwise falls back to ~/.config/ha-provision/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use provision_application::VariableSource;

    /// Points the global config at the jail so the host's own file is never read.
    fn isolate(jail: &mut Jail) {
        let config_home = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", config_home.display());
    }

    fn load(path: Option<&str>) -> figment::error::Result<FileConfig> {
        ConfigLoader::load(path.map(PathBuf::from).as_ref()).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.values.is_empty());
        assert_eq!(config.provision.compose_project, "npm");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("ha-provision"));
    }

    #[test]
    fn test_explicit_file_merges_over_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "explicit.toml",
                "[values]\nHOST_IP = \"10.0.0.2\"\n\n[provision]\nsyncthing_user = \"sync\"\n",
            )?;

            let config = load(Some("explicit.toml"))?;

            assert_eq!(config.values.len(), 1);
            assert_eq!(config.provision.syncthing_user, "sync");
            // untouched sections keep their defaults
            assert_eq!(config.provision.compose_project, "npm");
            assert!(config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "explicit.toml",
                "[values]\nhost_ip = \"10.0.0.9\"\nrole = \"BACKUP\"\n\n[provision]\nsyncthing_user = \"file-user\"\n",
            )?;
            jail.set_env("HA_PROVISION_VALUES__HOST_IP", "10.0.0.2");
            jail.set_env("HA_PROVISION_PROVISION__SYNCTHING_USER", "env-user");

            let config = load(Some("explicit.toml"))?;

            assert_eq!(config.provision.syncthing_user, "env-user");
            let source = config.values.to_source();
            assert_eq!(source.lookup("HOST_IP"), Some("10.0.0.2".to_string()));
            assert_eq!(source.lookup("ROLE"), Some("BACKUP".to_string()));
            Ok(())
        });
    }

    #[test]
    fn test_file_priority_explicit_project_global() {
        Jail::expect_with(|jail| {
            isolate(jail);
            std::fs::create_dir_all(jail.directory().join("xdg").join("ha-provision"))
                .map_err(|e| e.to_string())?;
            jail.create_file(
                "xdg/ha-provision/config.toml",
                "[provision]\ncompose_project = \"global\"\nsyncthing_user = \"global\"\n\n[output]\ncolor = false\n",
            )?;
            jail.create_file(
                "ha-provision.toml",
                "[provision]\ncompose_project = \"project\"\nsyncthing_user = \"project\"\n",
            )?;
            jail.create_file("explicit.toml", "[provision]\nsyncthing_user = \"explicit\"\n")?;

            let config = load(Some("explicit.toml"))?;
            assert_eq!(config.provision.syncthing_user, "explicit");
            assert_eq!(config.provision.compose_project, "project");
            assert!(!config.output.color);

            let config = load(None)?;
            assert_eq!(config.provision.syncthing_user, "project");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_bad_types() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("explicit.toml", "[output]\ncolor = \"very\"\n")?;

            assert!(load(Some("explicit.toml")).is_err());
            Ok(())
        });
    }
}

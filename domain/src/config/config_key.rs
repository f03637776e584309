//! Config key registry.
//!
//! Defines metadata for every input the renderer needs: environment
//! variable name, prompt text, sensitivity and an optional default.
//! The registry order is the resolution (and prompt) order.

use serde::{Deserialize, Serialize};

/// A named configuration input.
///
/// Serializes as its environment variable name (e.g. `HOST_IP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    HostIp,
    PeerIps,
    FloatingIp,
    Role,
    Priority,
    SyncthingDeviceId,
    SyncthingPeerDeviceIds,
    DbRootPass,
    DbUser,
    DbUserPass,
    DbName,
    ClusterName,
    XtrabackupPassword,
    LetsencryptDir,
    Puid,
    Pgid,
    DbPort,
    KeepalivedInterface,
    VirtualRouterId,
    SyncthingRescanInterval,
}

impl ConfigKey {
    /// Registry entry for this key.
    pub fn info(self) -> &'static ConfigKeyInfo {
        // KNOWN_KEYS is in declaration order, one entry per variant
        &KNOWN_KEYS[self as usize]
    }

    /// Environment variable name, also used as the `[values]` key in config files.
    pub fn env_name(self) -> &'static str {
        self.info().env
    }

    pub fn is_secret(self) -> bool {
        self.info().secret
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.env_name())
    }
}

/// Metadata for a single config key.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigKeyInfo {
    pub key: ConfigKey,
    /// Environment variable name (e.g., `"HOST_IP"`).
    pub env: &'static str,
    /// Human-readable description, shown as the interactive prompt.
    pub description: &'static str,
    /// Whether the value is a password.
    pub secret: bool,
    /// Value used when no source provides one. Keys with a default are never prompted.
    pub default: Option<&'static str>,
}

impl ConfigKeyInfo {
    /// Keys without a default must come from a source or the operator.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// All known config keys, in resolution order.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its environment variable name.
pub fn lookup_key(env: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.env == env)
}

const fn required(
    key: ConfigKey,
    env: &'static str,
    description: &'static str,
    secret: bool,
) -> ConfigKeyInfo {
    ConfigKeyInfo {
        key,
        env,
        description,
        secret,
        default: None,
    }
}

const fn defaulted(
    key: ConfigKey,
    env: &'static str,
    description: &'static str,
    default: &'static str,
) -> ConfigKeyInfo {
    ConfigKeyInfo {
        key,
        env,
        description,
        secret: false,
        default: Some(default),
    }
}

static KNOWN_KEYS: [ConfigKeyInfo; 20] = [
    // ==================== Network / failover ====================
    required(ConfigKey::HostIp, "HOST_IP", "IP address of this host", false),
    required(
        ConfigKey::PeerIps,
        "PEER_IPS",
        "Comma-separated IP addresses of the peer hosts",
        false,
    ),
    required(
        ConfigKey::FloatingIp,
        "FLOATING_IP",
        "Floating (virtual) IP shared by the pair",
        false,
    ),
    required(ConfigKey::Role, "ROLE", "Keepalived role (MASTER or BACKUP)", false),
    required(
        ConfigKey::Priority,
        "PRIORITY",
        "Keepalived priority (higher wins, e.g. 150 for MASTER, 100 for BACKUP)",
        false,
    ),
    // ==================== Syncthing ====================
    required(
        ConfigKey::SyncthingDeviceId,
        "SYNCTHING_DEVICE_ID",
        "Syncthing device ID of this host",
        false,
    ),
    required(
        ConfigKey::SyncthingPeerDeviceIds,
        "SYNCTHING_PEER_DEVICE_IDS",
        "Comma-separated Syncthing device IDs of the peer hosts",
        false,
    ),
    // ==================== Database ====================
    required(
        ConfigKey::DbRootPass,
        "DB_ROOT_PASS",
        "MariaDB root password",
        true,
    ),
    required(ConfigKey::DbUser, "DB_USER", "Database user for the proxy", false),
    required(
        ConfigKey::DbUserPass,
        "DB_USER_PASS",
        "Password for the database user",
        true,
    ),
    required(ConfigKey::DbName, "DB_NAME", "Database name for the proxy", false),
    required(
        ConfigKey::ClusterName,
        "CLUSTER_NAME",
        "Galera cluster name",
        false,
    ),
    required(
        ConfigKey::XtrabackupPassword,
        "XTRABACKUP_PASSWORD",
        "Password for the state snapshot transfer (mariabackup) user",
        true,
    ),
    // ==================== Proxy ====================
    required(
        ConfigKey::LetsencryptDir,
        "LETSENCRYPT_DIR",
        "Host directory holding the Let's Encrypt certificates",
        false,
    ),
    required(ConfigKey::Puid, "PUID", "User ID the proxy container runs as", false),
    required(ConfigKey::Pgid, "PGID", "Group ID the proxy container runs as", false),
    // ==================== Defaulted ====================
    defaulted(
        ConfigKey::DbPort,
        "DB_PORT",
        "Host port published for MariaDB",
        "3306",
    ),
    defaulted(
        ConfigKey::KeepalivedInterface,
        "KEEPALIVED_INTERFACE",
        "Network interface carrying the floating IP",
        "eth0",
    ),
    defaulted(
        ConfigKey::VirtualRouterId,
        "VIRTUAL_ROUTER_ID",
        "VRRP virtual router ID (must match on both hosts)",
        "51",
    ),
    defaulted(
        ConfigKey::SyncthingRescanInterval,
        "SYNCTHING_RESCAN_INTERVAL",
        "Syncthing folder rescan interval in seconds",
        "3600",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_keys_are_unique() {
        let envs: HashSet<_> = known_keys().iter().map(|k| k.env).collect();
        let keys: HashSet<_> = known_keys().iter().map(|k| k.key).collect();
        assert_eq!(envs.len(), known_keys().len());
        assert_eq!(keys.len(), known_keys().len());
    }

    #[test]
    fn test_registry_follows_declaration_order() {
        for (index, info) in known_keys().iter().enumerate() {
            assert_eq!(info.key as usize, index, "{} is out of place", info.env);
            assert_eq!(info.key.info().key, info.key);
        }
        assert_eq!(
            ConfigKey::SyncthingRescanInterval as usize + 1,
            known_keys().len()
        );
    }

    #[test]
    fn test_env_name_matches_serde_name() {
        for info in known_keys() {
            let json = serde_json::to_string(&info.key).unwrap();
            assert_eq!(json, format!("\"{}\"", info.env));
            assert_eq!(info.key.env_name(), info.env);
        }
    }

    #[test]
    fn test_lookup_existing_key() {
        let info = lookup_key("DB_USER_PASS").unwrap();
        assert_eq!(info.key, ConfigKey::DbUserPass);
        assert!(info.secret);
        assert!(info.is_required());
    }

    #[test]
    fn test_lookup_nonexistent_key() {
        assert!(lookup_key("NOT_A_KEY").is_none());
    }

    #[test]
    fn test_required_keys_come_first() {
        let first_default = known_keys()
            .iter()
            .position(|k| !k.is_required())
            .unwrap();
        assert_eq!(first_default, 16);
        assert!(known_keys()[first_default..].iter().all(|k| !k.is_required()));
    }

    #[test]
    fn test_secret_keys() {
        let secrets: Vec<_> = known_keys()
            .iter()
            .filter(|k| k.secret)
            .map(|k| k.env)
            .collect();
        assert_eq!(
            secrets,
            vec!["DB_ROOT_PASS", "DB_USER_PASS", "XTRABACKUP_PASSWORD"]
        );
    }

    #[test]
    fn test_interface_has_documented_default() {
        assert_eq!(ConfigKey::KeepalivedInterface.info().default, Some("eth0"));
        assert_eq!(ConfigKey::HostIp.to_string(), "HOST_IP");
    }
}

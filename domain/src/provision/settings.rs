//! Immutable provisioning settings assembled from resolved values

use super::peer_list::PeerList;
use super::role::{Priority, Role, VirtualRouterId};
use crate::config::{ConfigKey, ResolvedValues};
use crate::core::{error::DomainError, secret::Secret};
use serde::Serialize;

/// Addresses of this host and its peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSettings {
    pub host_ip: String,
    pub peer_ips: PeerList,
}

/// Keepalived VRRP instance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailoverSettings {
    pub role: Role,
    pub priority: Priority,
    pub floating_ip: String,
    /// Interface carrying the floating IP; defaults to `eth0`, which
    /// assumes the same interface name on both hosts.
    pub interface: String,
    pub virtual_router_id: VirtualRouterId,
}

/// MariaDB / Galera settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSettings {
    pub name: String,
    pub user: String,
    pub user_password: Secret,
    pub root_password: Secret,
    /// Host port published for client connections.
    pub port: u16,
    pub cluster_name: String,
    /// Password of the `mariabackup` user used for state snapshot transfer.
    pub sst_password: Secret,
}

/// Syncthing identity and peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncSettings {
    pub device_id: String,
    pub peer_device_ids: PeerList,
    pub rescan_interval_s: u32,
}

/// Reverse-proxy container settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxySettings {
    pub letsencrypt_dir: String,
    pub puid: String,
    pub pgid: String,
}

/// The complete, validated input of every renderer.
///
/// Built once from [`ResolvedValues`] and never mutated afterwards.
/// Only ROLE, PRIORITY and the numeric defaulted keys are validated;
/// every other value is embedded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionConfig {
    pub network: NetworkSettings,
    pub failover: FailoverSettings,
    pub database: DatabaseSettings,
    pub sync: SyncSettings,
    pub proxy: ProxySettings,
}

impl ProvisionConfig {
    pub fn from_values(values: &ResolvedValues) -> Result<Self, DomainError> {
        let get = |key: ConfigKey| -> Result<String, DomainError> {
            values
                .get(key)
                .map(str::to_string)
                .ok_or(DomainError::MissingValue(key.env_name()))
        };

        Ok(Self {
            network: NetworkSettings {
                host_ip: get(ConfigKey::HostIp)?,
                peer_ips: PeerList::parse(&get(ConfigKey::PeerIps)?),
            },
            failover: FailoverSettings {
                role: get(ConfigKey::Role)?.parse()?,
                priority: get(ConfigKey::Priority)?.parse()?,
                floating_ip: get(ConfigKey::FloatingIp)?,
                interface: get(ConfigKey::KeepalivedInterface)?,
                virtual_router_id: get(ConfigKey::VirtualRouterId)?.parse()?,
            },
            database: DatabaseSettings {
                name: get(ConfigKey::DbName)?,
                user: get(ConfigKey::DbUser)?,
                user_password: get(ConfigKey::DbUserPass)?.into(),
                root_password: get(ConfigKey::DbRootPass)?.into(),
                port: parse_number(ConfigKey::DbPort, &get(ConfigKey::DbPort)?, "a TCP port")?,
                cluster_name: get(ConfigKey::ClusterName)?,
                sst_password: get(ConfigKey::XtrabackupPassword)?.into(),
            },
            sync: SyncSettings {
                device_id: get(ConfigKey::SyncthingDeviceId)?,
                peer_device_ids: PeerList::parse(&get(ConfigKey::SyncthingPeerDeviceIds)?),
                rescan_interval_s: parse_number(
                    ConfigKey::SyncthingRescanInterval,
                    &get(ConfigKey::SyncthingRescanInterval)?,
                    "a number of seconds",
                )?,
            },
            proxy: ProxySettings {
                letsencrypt_dir: get(ConfigKey::LetsencryptDir)?,
                puid: get(ConfigKey::Puid)?,
                pgid: get(ConfigKey::Pgid)?,
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    key: ConfigKey,
    raw: &str,
    expected: &'static str,
) -> Result<T, DomainError> {
    raw.trim().parse().map_err(|_| DomainError::InvalidNumber {
        key: key.env_name(),
        value: raw.to_string(),
        expected,
    })
}

/// Values for a complete two-node setup, seen from the MASTER host.
#[cfg(test)]
pub(crate) fn sample_values() -> ResolvedValues {
    ResolvedValues::new()
        .with(ConfigKey::HostIp, "10.0.0.2")
        .with(ConfigKey::PeerIps, "10.0.0.3,10.0.0.4")
        .with(ConfigKey::FloatingIp, "10.0.0.100")
        .with(ConfigKey::Role, "MASTER")
        .with(ConfigKey::Priority, "150")
        .with(ConfigKey::SyncthingDeviceId, "SELF-DEVICE")
        .with(ConfigKey::SyncthingPeerDeviceIds, "A,B,C")
        .with(ConfigKey::DbRootPass, "rootpw")
        .with(ConfigKey::DbUser, "svc")
        .with(ConfigKey::DbUserPass, "pw")
        .with(ConfigKey::DbName, "npm")
        .with(ConfigKey::ClusterName, "proxy_cluster")
        .with(ConfigKey::XtrabackupPassword, "sstpw")
        .with(ConfigKey::LetsencryptDir, "/etc/letsencrypt")
        .with(ConfigKey::Puid, "1000")
        .with(ConfigKey::Pgid, "1000")
        .with(ConfigKey::DbPort, "3306")
        .with(ConfigKey::KeepalivedInterface, "eth0")
        .with(ConfigKey::VirtualRouterId, "51")
        .with(ConfigKey::SyncthingRescanInterval, "3600")
}

#[cfg(test)]
pub(crate) fn sample_config() -> ProvisionConfig {
    ProvisionConfig::from_values(&sample_values()).unwrap()
}

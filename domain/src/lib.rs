//! Domain layer for ha-provision
//!
//! This crate contains the configuration key registry, the typed
//! provisioning settings and the pure renderers for every artifact.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Config keys
//!
//! Every input is a named string ([`ConfigKey`]) resolved once, from the
//! environment, a config file, a built-in default or an interactive prompt.
//!
//! ## Provision config
//!
//! [`ProvisionConfig`] is the immutable, validated record built from the
//! resolved values. Renderers only ever see this record.
//!
//! ## Artifacts
//!
//! Five independent projections of the same record:
//!
//! - **SQL init script**: database, application user, SST backup user
//! - **Compose manifest**: MariaDB Galera node + reverse proxy
//! - **Galera fragment**: cluster name and `gcomm://` bootstrap address
//! - **Keepalived config**: one VRRP instance owning the floating IP
//! - **Syncthing config**: this device plus two shared folders

pub mod config;
pub mod core;
pub mod host;
pub mod provision;
pub mod render;

// Re-export commonly used types
pub use config::{
    ConfigKey, ConfigKeyInfo, OutputFormat, ResolvedValue, ResolvedValues, ValueSource,
    known_keys, lookup_key,
};
pub use core::{error::DomainError, secret::Secret};
pub use host::{HostCommand, PlanOptions, ProvisionPlan};
pub use provision::{
    peer_list::PeerList,
    role::{Priority, Role, VirtualRouterId},
    settings::{
        DatabaseSettings, FailoverSettings, NetworkSettings, ProvisionConfig, ProxySettings,
        SyncSettings,
    },
};
pub use render::{ArtifactKind, RenderedArtifact, StackLayout, render_all, render_artifact};

//! Typed provisioning settings.
//!
//! - [`peer_list::PeerList`]: ordered peers parsed from a comma-separated string
//! - [`role::Role`], [`role::Priority`], [`role::VirtualRouterId`]: VRRP values
//! - [`settings::ProvisionConfig`]: the immutable record every renderer reads

pub mod peer_list;
pub mod role;
pub mod settings;

//! Application-level configuration.
//!
//! - [`ProvisionParams`]: packages and service settings for the `apply` flow

pub mod provision_params;

pub use provision_params::ProvisionParams;

//! Host commands for the `apply` flow.
//!
//! - [`command::HostCommand`]: one external program invocation
//! - [`plan::ProvisionPlan`]: the fixed install / start sequence

pub mod command;
pub mod plan;

pub use command::HostCommand;
pub use plan::{PlanOptions, ProvisionPlan};

//! Progress reporters for render and apply runs

pub mod reporter;

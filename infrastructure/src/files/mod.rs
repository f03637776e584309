//! Filesystem adapters for [`ArtifactWriter`](provision_application::ArtifactWriter)

mod atomic_writer;
mod dry_run;

pub use atomic_writer::AtomicFileWriter;
pub use dry_run::DryRunWriter;

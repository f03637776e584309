//! Atomic artifact writer: temp file in the target directory, then rename.
//!
//! A crash mid-write leaves either the old file or the new one, never a
//! truncated config.

use provision_application::{ArtifactWriter, WriteError};
use provision_domain::RenderedArtifact;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Compose manifest: read by host root only.
const PRIVATE_MODE: u32 = 0o600;
/// Everything else, including files the MariaDB container reads as uid 999.
const PUBLIC_MODE: u32 = 0o644;

#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicFileWriter;

impl AtomicFileWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_atomic(&self, artifact: &RenderedArtifact) -> std::io::Result<()> {
        let path = artifact.path();
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".ha-provision-")
            .tempfile_in(parent)?;
        tmp.write_all(artifact.contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        set_mode(tmp.path(), artifact.is_private())?;

        tmp.persist(path).map_err(|e| e.error)?;
        debug!(path = %path.display(), private = artifact.is_private(), "Persisted");
        Ok(())
    }
}

impl ArtifactWriter for AtomicFileWriter {
    fn write(&self, artifact: &RenderedArtifact) -> Result<(), WriteError> {
        self.write_atomic(artifact)
            .map_err(|e| WriteError::new(artifact.path(), e))
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, private: bool) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mode = if private { PRIVATE_MODE } else { PUBLIC_MODE };
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _private: bool) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use provision_domain::{ArtifactKind, StackLayout};

    fn artifact(kind: ArtifactKind, path: &Path, contents: &str) -> RenderedArtifact {
        RenderedArtifact {
            kind,
            path: path.to_path_buf(),
            contents: contents.to_string(),
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mariadb").join("init").join("init.sql");

        AtomicFileWriter::new()
            .write(&artifact(ArtifactKind::SqlInit, &path, "SELECT 1;\n"))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "SELECT 1;\n");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("keepalived.conf");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        AtomicFileWriter::new()
            .write(&artifact(ArtifactKind::KeepalivedConfig, &path, "new\n"))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        // no temp files left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_mode_per_artifact_kind() {
        use std::os::unix::fs::PermissionsExt;
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = StackLayout {
            stack_dir: temp_dir.path().join("stack"),
            app_data_dir: temp_dir.path().join("stack").join("data"),
            keepalived_config: temp_dir.path().join("keepalived").join("keepalived.conf"),
            syncthing_config: temp_dir.path().join("syncthing").join("config.xml"),
        };

        let writer = AtomicFileWriter::new();
        for kind in ArtifactKind::ALL {
            writer
                .write(&artifact(kind, &layout.path_for(kind), "x\n"))
                .unwrap();
        }

        let mode = |kind: ArtifactKind| {
            fs::metadata(layout.path_for(kind)).unwrap().permissions().mode() & 0o777
        };
        assert_eq!(mode(ArtifactKind::ComposeManifest), 0o600);
        // read by the mysql user inside the container
        assert_eq!(mode(ArtifactKind::SqlInit), 0o644);
        assert_eq!(mode(ArtifactKind::GaleraConfig), 0o644);
        assert_eq!(mode(ArtifactKind::KeepalivedConfig), 0o644);
        assert_eq!(mode(ArtifactKind::SyncthingConfig), 0o644);
    }

    #[test]
    fn test_write_error_names_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("galera.cnf");

        let err = AtomicFileWriter::new()
            .write(&artifact(ArtifactKind::GaleraConfig, &path, "[galera]\n"))
            .unwrap_err();

        assert_eq!(err.path, path);
        assert!(err.to_string().contains("galera.cnf"));
    }
}

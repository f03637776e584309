//! Writer that prints artifacts to stdout instead of the filesystem (`render --stdout`).

use provision_application::{ArtifactWriter, WriteError};
use provision_domain::RenderedArtifact;
use std::io::{self, Write};

pub struct StdoutPrinter;

impl StdoutPrinter {
    fn print(out: &mut impl Write, artifact: &RenderedArtifact) -> io::Result<()> {
        writeln!(out, "==> {} <==", artifact.path.display())?;
        out.write_all(artifact.contents.as_bytes())?;
        writeln!(out)
    }
}

impl ArtifactWriter for StdoutPrinter {
    fn write(&self, artifact: &RenderedArtifact) -> Result<(), WriteError> {
        let mut out = io::stdout().lock();
        Self::print(&mut out, artifact).map_err(|e| WriteError::new(artifact.path(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provision_domain::ArtifactKind;
    use std::path::PathBuf;

    #[test]
    fn test_print_has_path_banner() {
        let artifact = RenderedArtifact {
            kind: ArtifactKind::KeepalivedConfig,
            path: PathBuf::from("/etc/keepalived/keepalived.conf"),
            contents: "vrrp_instance VI_1 {\n}\n".to_string(),
        };
        let mut buf = Vec::new();
        StdoutPrinter::print(&mut buf, &artifact).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "==> /etc/keepalived/keepalived.conf <==\nvrrp_instance VI_1 {\n}\n\n"
        );
    }
}

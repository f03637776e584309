//! Peer list value object

use serde::Serialize;

/// Ordered peer identifiers (IP addresses or Syncthing device IDs).
///
/// Parsed by splitting on `,`: order and duplicates are kept and entries
/// are not trimmed, so `"a,,b"` yields three entries with an empty one in
/// the middle. The empty string yields no entries at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeerList(Vec<String>);

impl PeerList {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self(raw.split(',').map(str::to_string).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any entry is empty (typically a stray comma in the input).
    pub fn has_empty_entries(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }
}

impl From<&str> for PeerList {
    fn from(raw: &str) -> Self {
        PeerList::parse(raw)
    }
}

impl std::fmt::Display for PeerList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

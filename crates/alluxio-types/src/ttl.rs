use std::fmt;

use serde::Serialize;

/// What happens to a file when its TTL expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TtlAction {
    /// Remove the file from Alluxio and the UFS.
    Delete,
    /// Evict the file's blocks from Alluxio storage only.
    Free,
}

impl TtlAction {
    pub const ALL: [TtlAction; 2] = [Self::Delete, Self::Free];
}

impl fmt::Display for TtlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete => f.write_str("delete"),
            Self::Free => f.write_str("free"),
        }
    }
}

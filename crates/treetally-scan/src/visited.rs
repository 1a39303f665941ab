//! Visited-directory tracking for cycle protection.

use std::collections::HashSet;
use std::fs::Metadata;

/// Stable filesystem identity of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    /// Device ID.
    pub device: u64,
    /// Inode number.
    pub inode: u64,
}

impl FileIdentity {
    /// Identity of an entry from its metadata, when the platform exposes
    /// one.
    #[cfg(unix)]
    pub fn from_metadata(metadata: &Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;
        Some(Self {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }

    #[cfg(not(unix))]
    pub fn from_metadata(_metadata: &Metadata) -> Option<Self> {
        None // no stable identity through this API off Unix
    }
}

/// Tracks directories already entered so that link cycles terminate.
///
/// The scanner consults this before descending: a second arrival at the
/// same (device, inode) pair prunes the subtree instead of recursing
/// forever.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<FileIdentity>,
}

impl VisitedSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an identity. Returns `true` the first time it is seen.
    pub fn insert(&mut self, identity: FileIdentity) -> bool {
        self.seen.insert(identity)
    }

    /// Number of directories entered so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no directory has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_new_identity() {
        let mut visited = VisitedSet::new();
        let identity = FileIdentity {
            device: 1,
            inode: 12345,
        };

        assert!(visited.insert(identity));
        assert!(!visited.insert(identity)); // second time returns false
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_same_inode_on_different_devices() {
        let mut visited = VisitedSet::new();
        let first = FileIdentity {
            device: 1,
            inode: 12345,
        };
        let second = FileIdentity {
            device: 2,
            inode: 12345,
        };

        assert!(visited.insert(first));
        assert!(visited.insert(second)); // different device, so it's new
        assert_eq!(visited.len(), 2);
    }
}

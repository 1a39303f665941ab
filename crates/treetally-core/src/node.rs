//! File and directory node types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Kind-specific payload of a tree node.
///
/// File-only attributes (extension, line count) and directory-only
/// attributes (children) live in the variants, so a node can never carry
/// both sets at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file.
    File {
        /// Lower-cased extension including the leading dot (`.ts`),
        /// empty when the file has none.
        extension: CompactString,
        /// Line-feed count of the raw contents plus one.
        line_count: u64,
    },
    /// Directory.
    Directory {
        /// Children in directory-listing order; pruned entries are
        /// simply absent, never placeholders.
        children: Vec<Node>,
    },
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory { .. })
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File { .. })
    }
}

/// A single file or directory retained by a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Slash-joined logical path from the scan root (not the OS path).
    pub path: CompactString,

    /// Entry basename.
    pub name: CompactString,

    /// Byte size the filesystem reports for this entry alone. For a
    /// directory this is the directory entry itself, not its contents.
    pub size: u64,

    /// Node type and kind-specific attributes.
    pub kind: NodeKind,
}

impl Node {
    /// Create a new file node.
    pub fn file(
        path: impl Into<CompactString>,
        name: impl Into<CompactString>,
        size: u64,
        extension: impl Into<CompactString>,
        line_count: u64,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
            kind: NodeKind::File {
                extension: extension.into(),
                line_count,
            },
        }
    }

    /// Create a new directory node.
    pub fn directory(
        path: impl Into<CompactString>,
        name: impl Into<CompactString>,
        size: u64,
        children: Vec<Node>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
            kind: NodeKind::Directory { children },
        }
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Children of a directory node; `None` for files.
    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Extension of a file node; `None` for directories.
    pub fn extension(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { extension, .. } => Some(extension),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Line count of a file node; `None` for directories.
    pub fn line_count(&self) -> Option<u64> {
        match &self.kind {
            NodeKind::File { line_count, .. } => Some(*line_count),
            NodeKind::Directory { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_node_creation() {
        let node = Node::file("src/lib.rs", "lib.rs", 1024, ".rs", 40);
        assert!(node.is_file());
        assert!(!node.is_dir());
        assert_eq!(node.size, 1024);
        assert_eq!(node.extension(), Some(".rs"));
        assert_eq!(node.line_count(), Some(40));
        assert!(node.children().is_none());
    }

    #[test]
    fn test_directory_node_creation() {
        let child = Node::file("proj/a.ts", "a.ts", 2, ".ts", 2);
        let node = Node::directory("proj", "proj", 4096, vec![child]);
        assert!(node.is_dir());
        assert!(!node.is_file());
        assert_eq!(node.children().map(<[Node]>::len), Some(1));
        assert!(node.extension().is_none());
        assert!(node.line_count().is_none());
    }

    #[test]
    fn test_extensionless_file() {
        let node = Node::file("Makefile", "Makefile", 120, "", 10);
        assert_eq!(node.extension(), Some(""));
    }
}

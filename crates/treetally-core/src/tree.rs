//! Scan result container.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ProjectConfig;
use crate::error::ScanWarning;
use crate::node::Node;
use crate::totals::Totals;

/// Complete result of one scan: the retained tree plus the totals.
///
/// Built once by the scanner, read-only afterwards. This is the whole
/// artifact handed to presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTree {
    /// Root node of the retained tree.
    pub root: Node,

    /// Filesystem path that was scanned (canonicalized).
    pub root_path: PathBuf,

    /// Configuration the scan ran with.
    pub config: ProjectConfig,

    /// Aggregate totals.
    pub totals: Totals,

    /// Non-fatal conditions noted while scanning.
    pub warnings: Vec<ScanWarning>,

    /// Duration of the scan.
    pub scan_duration: Duration,
}

impl ProjectTree {
    /// Create a new project tree.
    pub fn new(
        root: Node,
        root_path: PathBuf,
        config: ProjectConfig,
        totals: Totals,
        warnings: Vec<ScanWarning>,
        scan_duration: Duration,
    ) -> Self {
        Self {
            root,
            root_path,
            config,
            totals,
            warnings,
            scan_duration,
        }
    }

    /// Get the total number of files.
    pub fn total_files(&self) -> u64 {
        self.totals.total_files
    }

    /// Get the total number of directories.
    pub fn total_directories(&self) -> u64 {
        self.totals.total_directories
    }

    /// Get the total byte size.
    pub fn total_size(&self) -> u64 {
        self.totals.total_size
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;

    #[test]
    fn test_project_tree_accessors() {
        let classifier = Classifier::new();
        let mut totals = Totals::new();
        totals.record_directory(4096);
        totals.record_file(&classifier, ".ts", 2, 10);

        let root = Node::directory(
            "proj",
            "proj",
            4096,
            vec![Node::file("proj/a.ts", "a.ts", 10, ".ts", 2)],
        );

        let tree = ProjectTree::new(
            root,
            PathBuf::from("/tmp/proj"),
            ProjectConfig::new("/tmp/proj"),
            totals,
            Vec::new(),
            Duration::from_millis(3),
        );

        assert_eq!(tree.total_files(), 1);
        assert_eq!(tree.total_directories(), 1);
        assert_eq!(tree.total_size(), 4106);
        assert!(!tree.has_warnings());
    }
}

//! File system scanning engine for treetally.
//!
//! This crate walks a directory tree depth-first and produces the node
//! tree together with the running totals, in a single pass.
//!
//! # Overview
//!
//! `treetally-scan` is responsible for traversing the configured root and
//! building the project tree. Key behaviors:
//!
//! - **Single pass**: nodes and totals come out of the same traversal
//! - **Ignore pruning**: ignore-listed basenames are dropped at any depth
//! - **Revisit protection**: directories already seen (by device/inode)
//!   are pruned with a warning instead of looping
//! - **All or nothing**: an unreadable retained entry fails the scan
//!
//! # Example
//!
//! ```rust,no_run
//! use treetally_scan::{ProjectConfig, TreeScanner};
//!
//! let config = ProjectConfig::new("/path/to/scan");
//! let scanner = TreeScanner::for_config(&config);
//! let tree = scanner.scan(&config).unwrap();
//!
//! println!("Total files: {}", tree.total_files());
//! println!("Total size: {} bytes", tree.total_size());
//! ```

mod scanner;
mod visited;

pub use scanner::TreeScanner;
pub use visited::{FileIdentity, VisitedSet};

// Re-export core types for convenience
pub use treetally_core::{
    Classifier, ExtensionCount, Node, NodeKind, ProjectConfig, ProjectTree, ScanError,
    ScanWarning, Totals, WarningKind,
};

//! Console rendering for treetally.
//!
//! This crate turns a scanned [`ProjectTree`] into the two console
//! artifacts:
//!
//! - **Tree listing** - the retained tree as an indented list of names
//! - **Summary** - colored totals with a per-extension breakdown
//!
//! Both come in `render_*` (to `String`) and `print_*` (to stdout)
//! flavors; rendering never reorders what the scan produced.
//!
//! ```rust,ignore
//! use treetally_report::{print_summary, print_tree};
//! use treetally_scan::{ProjectConfig, TreeScanner};
//!
//! let config = ProjectConfig::new("/path/to/scan");
//! let tree = TreeScanner::for_config(&config).scan(&config).unwrap();
//!
//! print_tree(&tree.root);
//! print_summary(&tree);
//! ```

mod summary;
mod tree;

pub use summary::{print_summary, render_summary};
pub use tree::{print_tree, render_tree};

// Re-export core types
pub use treetally_core::{Node, ProjectTree, Totals};

//! Core types for treetally.
//!
//! This crate provides the data structures shared across the treetally
//! workspace: the node tree, scan totals, extension classifier, project
//! configuration, and error types. It performs no filesystem access of
//! its own.

mod classify;
mod config;
mod error;
mod node;
mod totals;
mod tree;

pub use classify::{Classifier, GENERIC_CATEGORY};
pub use config::{ProjectConfig, ProjectConfigBuilder};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use node::{Node, NodeKind};
pub use totals::{ExtensionCount, Totals};
pub use tree::ProjectTree;

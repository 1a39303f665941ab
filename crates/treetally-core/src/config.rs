//! Project configuration types.

use std::path::PathBuf;

use compact_str::CompactString;
use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration for one project scan.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ProjectConfig {
    /// Display label used by the summary report.
    #[builder(default = "default_name()")]
    #[serde(default = "default_name")]
    pub name: String,

    /// Root path to scan.
    pub path: PathBuf,

    /// Reserved field; accepted from config files but never consulted.
    #[builder(default)]
    #[serde(default)]
    pub git: String,

    /// Basenames pruned at any depth. Exact matches only, no patterns.
    #[builder(default)]
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Extension -> category rules layered over the built-in table.
    #[builder(default)]
    #[serde(default)]
    pub categories: IndexMap<CompactString, String>,
}

fn default_name() -> String {
    "project".to_string()
}

impl ProjectConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.path {
            if path.as_os_str().is_empty() {
                return Err("Scan path cannot be empty".to_string());
            }
        } else {
            return Err("Scan path is required".to_string());
        }
        Ok(())
    }
}

impl ProjectConfig {
    /// Create a new config builder.
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    /// Create a simple config for scanning a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            name: default_name(),
            path: path.into(),
            git: String::new(),
            ignore: Vec::new(),
            categories: IndexMap::new(),
        }
    }

    /// Check if a basename is on the ignore list.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|entry| entry == name)
    }

    /// Apply the builder's path rule to a config that was deserialized
    /// rather than built.
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("Scan path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

//! Aggregate totals for one scan.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::Classifier;

/// Occurrence counter for a single file extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionCount {
    /// Display category, resolved when the extension was first seen.
    pub display_name: String,
    /// The extension itself, lower-cased with leading dot.
    pub extension: CompactString,
    /// Number of files carrying this extension.
    pub count: u64,
}

/// Running statistics accumulated across one scan.
///
/// State only grows: the scanner records every retained entry and nothing
/// is ever removed. The extension table keeps first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Total number of files.
    pub total_files: u64,
    /// Total number of directories.
    pub total_directories: u64,
    /// Total line count across all files.
    pub total_lines: u64,
    /// Total byte size (file sizes plus raw directory-entry sizes).
    pub total_size: u64,
    /// Extension table, keyed by extension in first-seen order.
    extensions: IndexMap<CompactString, ExtensionCount>,
}

impl Totals {
    /// Create new empty totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file: bumps the file counter, line and size sums, and
    /// the extension table. The classifier is consulted for the display
    /// name only when the extension is first inserted.
    pub fn record_file(
        &mut self,
        classifier: &Classifier,
        extension: &str,
        line_count: u64,
        size: u64,
    ) {
        self.total_files += 1;
        self.total_lines += line_count;
        self.total_size += size;

        if let Some(entry) = self.extensions.get_mut(extension) {
            entry.count += 1;
        } else {
            let extension = CompactString::new(extension);
            let entry = ExtensionCount {
                display_name: classifier.classify(&extension).to_string(),
                extension: extension.clone(),
                count: 1,
            };
            self.extensions.insert(extension, entry);
        }
    }

    /// Record one directory: bumps the directory counter and the size sum
    /// by the directory's own entry size.
    pub fn record_directory(&mut self, size: u64) {
        self.total_directories += 1;
        self.total_size += size;
    }

    /// Extension entries in first-seen order.
    pub fn extensions(&self) -> impl Iterator<Item = &ExtensionCount> {
        self.extensions.values()
    }

    /// Look up the entry for one extension.
    pub fn extension_count(&self, extension: &str) -> Option<&ExtensionCount> {
        self.extensions.get(extension)
    }

    /// Number of distinct extensions seen.
    pub fn extension_kinds(&self) -> usize {
        self.extensions.len()
    }
}

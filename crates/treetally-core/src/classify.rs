//! Extension classification.

use compact_str::CompactString;
use indexmap::IndexMap;

/// Category returned for extensions with no mapping, including the empty
/// extension of extensionless files.
pub const GENERIC_CATEGORY: &str = "file";

/// Built-in extension table. Anything else falls back to
/// [`GENERIC_CATEGORY`]; config rules can extend or override this.
const BUILTIN_CATEGORIES: [(&str, &str); 5] = [
    (".txt", "text"),
    (".js", "javascript"),
    (".json", "json"),
    (".ts", "typescript"),
    (".php", "php"),
];

/// Maps a file extension to a human-readable category name.
///
/// Lookups are exact; callers are expected to pass extensions already
/// lower-cased and carrying their leading dot, the form the scanner
/// stores on file nodes. `classify` is total: every input produces a
/// category.
#[derive(Debug, Clone)]
pub struct Classifier {
    categories: IndexMap<CompactString, String>,
}

impl Classifier {
    /// Create a classifier with the built-in table only.
    pub fn new() -> Self {
        let categories = BUILTIN_CATEGORIES
            .into_iter()
            .map(|(ext, name)| (CompactString::new(ext), name.to_string()))
            .collect();
        Self { categories }
    }

    /// Create a classifier with the built-in table plus user rules.
    ///
    /// A rule for an already-mapped extension replaces the built-in
    /// entry.
    pub fn with_rules(rules: &IndexMap<CompactString, String>) -> Self {
        let mut classifier = Self::new();
        for (ext, name) in rules {
            classifier.categories.insert(ext.clone(), name.clone());
        }
        classifier
    }

    /// Look up the display category for an extension.
    pub fn classify(&self, extension: &str) -> &str {
        self.categories
            .get(extension)
            .map(String::as_str)
            .unwrap_or(GENERIC_CATEGORY)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

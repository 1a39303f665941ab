//! Recursive depth-first directory scanner.

use std::fs;
use std::path::Path;
use std::time::Instant;

use compact_str::{CompactString, format_compact};

use treetally_core::{
    Classifier, Node, ProjectConfig, ProjectTree, ScanError, ScanWarning, Totals,
};

use crate::visited::{FileIdentity, VisitedSet};

/// Single-threaded, single-pass scanner.
///
/// Walks the configured root depth-first in directory-listing order,
/// pruning ignore-listed basenames at every level, and builds the node
/// tree while accumulating the totals. An access failure on any retained
/// entry aborts the whole scan; only unsupported entry kinds, broken
/// symlinks and directory revisits are skipped, each with a warning.
pub struct TreeScanner {
    classifier: Classifier,
}

impl TreeScanner {
    /// Create a scanner with the built-in classifier table.
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }

    /// Create a scanner whose classifier also carries the config's
    /// category rules.
    pub fn for_config(config: &ProjectConfig) -> Self {
        Self {
            classifier: Classifier::with_rules(&config.categories),
        }
    }

    /// Scan the configured root and return the tree plus totals.
    pub fn scan(&self, config: &ProjectConfig) -> Result<ProjectTree, ScanError> {
        let start = Instant::now();
        let root_path = config
            .path
            .canonicalize()
            .map_err(|e| ScanError::io(&config.path, e))?;

        if config.is_ignored(&basename(&root_path)) {
            return Err(ScanError::RootIgnored { path: root_path });
        }

        let mut totals = Totals::new();
        let mut visited = VisitedSet::new();
        let mut warnings = Vec::new();

        let root = self
            .scan_entry(
                &root_path,
                None,
                config,
                &mut totals,
                &mut visited,
                &mut warnings,
            )?
            .ok_or_else(|| ScanError::UnsupportedRoot {
                path: root_path.clone(),
            })?;

        let scan_duration = start.elapsed();
        tracing::debug!(
            files = totals.total_files,
            directories = totals.total_directories,
            warnings = warnings.len(),
            elapsed_ms = scan_duration.as_millis() as u64,
            "scan finished"
        );

        Ok(ProjectTree::new(
            root,
            root_path,
            config.clone(),
            totals,
            warnings,
            scan_duration,
        ))
    }

    /// Scan one entry; `Ok(None)` means the entry was pruned.
    fn scan_entry(
        &self,
        path: &Path,
        parent_logical: Option<&str>,
        config: &ProjectConfig,
        totals: &mut Totals,
        visited: &mut VisitedSet,
        warnings: &mut Vec<ScanWarning>,
    ) -> Result<Option<Node>, ScanError> {
        let name = basename(path);
        if config.is_ignored(&name) {
            return Ok(None);
        }

        // fs::metadata follows symlinks, so linked entries count as
        // their targets.
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                let is_symlink = path
                    .symlink_metadata()
                    .is_ok_and(|m| m.file_type().is_symlink());
                if is_symlink {
                    let target = fs::read_link(path)
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_default();
                    tracing::warn!(path = %path.display(), "skipping broken symlink");
                    warnings.push(ScanWarning::broken_symlink(path, &target));
                    return Ok(None);
                }
                return Err(ScanError::io(path, err));
            }
        };

        let logical = match parent_logical {
            Some(parent) => format_compact!("{parent}/{name}"),
            None => name.clone(),
        };

        if metadata.is_dir() {
            if let Some(identity) = FileIdentity::from_metadata(&metadata) {
                if !visited.insert(identity) {
                    tracing::warn!(path = %path.display(), "pruning already-visited directory");
                    warnings.push(ScanWarning::cycle_detected(path));
                    return Ok(None);
                }
            }

            // Own bookkeeping before the children: the recorded size is
            // the directory entry itself, never the subtree sum.
            totals.record_directory(metadata.len());

            let mut children = Vec::new();
            for entry in fs::read_dir(path).map_err(|e| ScanError::io(path, e))? {
                let entry = entry.map_err(|e| ScanError::io(path, e))?;
                let child = self.scan_entry(
                    &entry.path(),
                    Some(&logical),
                    config,
                    totals,
                    visited,
                    warnings,
                )?;
                if let Some(child) = child {
                    children.push(child);
                }
            }

            return Ok(Some(Node::directory(
                logical,
                name,
                metadata.len(),
                children,
            )));
        }

        if metadata.is_file() {
            let contents = fs::read(path).map_err(|e| ScanError::io(path, e))?;
            let line_count = count_lines(&contents);
            let extension = extension_of(path);

            totals.record_file(&self.classifier, &extension, line_count, metadata.len());

            return Ok(Some(Node::file(
                logical,
                name,
                metadata.len(),
                extension,
                line_count,
            )));
        }

        // Sockets, devices, fifos: skipped, never fatal.
        tracing::warn!(path = %path.display(), "skipping unsupported entry kind");
        warnings.push(ScanWarning::unsupported_kind(path));
        Ok(None)
    }
}

impl Default for TreeScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Basename of a path as a UTF-8 string; falls back to the whole path
/// for roots like `/` that have no file name.
fn basename(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(path.to_string_lossy()))
}

/// Line-feed count of the raw contents, plus one.
///
/// Equivalent to splitting on `\n` and counting the segments: a trailing
/// newline contributes a final empty segment, so `"a\nb\n"` is three
/// lines and an empty file is one.
fn count_lines(contents: &[u8]) -> u64 {
    bytecount::count(contents, b'\n') as u64 + 1
}

/// Lower-cased extension with its leading dot; empty when the file has
/// none.
fn extension_of(path: &Path) -> CompactString {
    match path.extension() {
        Some(ext) => format_compact!(".{}", ext.to_string_lossy().to_lowercase()),
        None => CompactString::new(""),
    }
}

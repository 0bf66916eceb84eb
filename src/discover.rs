//! Entry-point discovery for package trees
//!
//! Finds the `index.ts` entry of every package directory directly under a
//! root. Discovery is shallow on purpose: one entry per package, packages
//! are the root's immediate child directories, and the list is sorted so a
//! run over the same tree always visits modules in the same order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ApiSurfaceError, Result};

/// Find the package entry points under a root directory.
///
/// Returns `<root>/<package>/index.ts` for every child directory that has
/// one, sorted by path. A root with its own `index.ts` and no package
/// subdirectories is treated as a single-package tree.
pub fn discover_entries(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ApiSurfaceError::FileNotFound {
            path: root.display().to_string(),
        });
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(root)?.flatten() {
        let path = entry.path();
        if !path.is_dir() || should_skip_path(&path) {
            continue;
        }
        let index = path.join("index.ts");
        if index.is_file() {
            entries.push(index);
        }
    }
    entries.sort();

    if entries.is_empty() {
        let index = root.join("index.ts");
        if index.is_file() {
            entries.push(index);
        }
    }

    Ok(entries)
}

/// Check if a directory should be skipped during discovery.
///
/// Skips hidden directories and common non-source directories:
/// node_modules, dist, build, coverage.
pub fn should_skip_path(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        name.starts_with('.')
            || name == "node_modules"
            || name == "dist"
            || name == "build"
            || name == "coverage"
    } else {
        false
    }
}

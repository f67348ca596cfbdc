//! Scan target resolution.
//!
//! Turns the configured targets into a flat list of files to read. A target
//! naming a file is taken as-is; a target naming a directory is walked and
//! filtered by extension.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::error::{ScanError, ScanResult};

/// Resolve scan targets into the set of candidate files.
///
/// Fails on the first target that does not exist, or on any directory entry
/// that cannot be read during traversal. Overlapping targets are collapsed
/// and the result is sorted, so the order is stable across runs.
pub fn resolve_targets<P: AsRef<Path>>(
    targets: &[P],
    extension: &str,
) -> ScanResult<Vec<PathBuf>> {
    let suffix = format!(".{}", extension);
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for target in targets {
        let target = target.as_ref();

        if target.is_file() {
            files.insert(target.to_path_buf());
        } else if target.is_dir() {
            collect_dir(target, &suffix, &mut files)?;
        } else {
            return Err(ScanError::PathNotFound(target.to_path_buf()));
        }
    }

    Ok(files.into_iter().collect())
}

fn collect_dir(dir: &Path, suffix: &str, files: &mut BTreeSet<PathBuf>) -> ScanResult<()> {
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            source,
        })?;
        let path = entry.path();

        if path.is_file() && has_suffix(path, suffix) {
            files.insert(path.to_path_buf());
        }
    }
    Ok(())
}

/// Name-based match: `.dart` alone counts, like any other name ending in it.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

//! Extraction pipeline.
//!
//! One linear pass in three phases:
//!
//! 1. **Resolve**: expand scan targets into candidate files (`resolve`)
//! 2. **Extract**: read each file and match translation calls (`extract`),
//!    accumulating unique keys (`keys`)
//! 3. **Render**: serialize the sorted keys as a gettext template (`template`)
//!
//! Every failure is fatal. Nothing is written until all files have been read,
//! so a failed run leaves any previous template untouched.

pub mod error;
pub mod extract;
pub mod keys;
pub mod resolve;
pub mod template;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use error::{ScanError, ScanResult};
pub use extract::{DEFAULT_FUNCTION, KeyExtractor};
pub use keys::KeySet;
pub use resolve::resolve_targets;
pub use template::{render_template, write_template};

/// Inputs to a single extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub targets: Vec<PathBuf>,
    /// Extension (without the dot) of files picked up from directories.
    pub extension: String,
    pub function: String,
}

/// Per-file match statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKeys {
    pub path: PathBuf,
    /// Matches in this file, duplicates included.
    pub match_count: usize,
}

/// Outcome of the resolve and extract phases.
#[derive(Debug, Default)]
pub struct Extraction {
    pub keys: KeySet,
    pub files: Vec<FileKeys>,
}

/// Read one file and add its keys to `keys`.
///
/// The file must be valid UTF-8. Returns the number of matches found.
pub fn scan_file(path: &Path, extractor: &KeyExtractor, keys: &mut KeySet) -> ScanResult<usize> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let matches = extractor.extract(&content);
    let count = matches.len();
    keys.extend(matches);
    Ok(count)
}

/// Resolve the targets and collect every key from the resulting files.
pub fn collect_keys(options: &ExtractOptions) -> ScanResult<Extraction> {
    let extractor = KeyExtractor::new(&options.function)?;
    let paths = resolve_targets(&options.targets, &options.extension)?;

    let mut extraction = Extraction::default();
    for path in paths {
        let match_count = scan_file(&path, &extractor, &mut extraction.keys)?;
        extraction.files.push(FileKeys { path, match_count });
    }

    Ok(extraction)
}

/// Full run: collect keys, then overwrite `output` with the template.
pub fn run_extraction(options: &ExtractOptions, output: &Path) -> ScanResult<Extraction> {
    let extraction = collect_keys(options)?;
    write_template(output, &extraction.keys)?;
    Ok(extraction)
}

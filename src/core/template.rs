//! gettext template rendering.
//!
//! Each key becomes one entry:
//!
//! ```text
//! msgid "key"
//! msgstr ""
//!
//! ```
//!
//! Keys are written between the quotes exactly as extracted. A key holding a
//! `"` produces a line that gettext tools will reject; quoting is left alone
//! so the output stays byte-compatible with earlier templates.

use std::{fmt::Write as _, fs, path::Path};

use super::{
    error::{ScanError, ScanResult},
    keys::KeySet,
};

/// Render the template document for `keys`, in key order.
///
/// An empty set renders an empty document.
pub fn render_template(keys: &KeySet) -> String {
    let mut out = String::new();
    for key in keys.iter() {
        // Writing to a String cannot fail.
        let _ = write!(out, "msgid \"{}\"\nmsgstr \"\"\n\n", key);
    }
    out
}

/// Render and write the template, replacing any existing file.
///
/// Parent directories are not created.
pub fn write_template(path: &Path, keys: &KeySet) -> ScanResult<()> {
    fs::write(path, render_template(keys)).map_err(|source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    })
}

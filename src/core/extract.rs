//! Translation call matching.
//!
//! Keys are found with a single regular expression rather than a parser:
//! `tr('key')` and `tr("key")` with optional whitespace inside the parentheses.
//! Calls split across lines, concatenated literals and nested calls are not
//! recognised.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{ScanError, ScanResult};

/// Function name looked for when none is configured.
pub const DEFAULT_FUNCTION: &str = "tr";

// Opening and closing quotes are matched independently; the literal itself may
// contain neither quote character.
const CALL_ARGUMENT: &str = r#"\(\s*["']([^"']+)["']\s*\)"#;

static FUNCTION_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$.]*$").unwrap());

/// Check that a configured function name is usable as a call identifier.
pub fn is_valid_function_name(name: &str) -> bool {
    FUNCTION_NAME_REGEX.is_match(name)
}

/// Matcher for one translation function.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    pattern: Regex,
}

impl KeyExtractor {
    pub fn new(function: &str) -> ScanResult<Self> {
        if !is_valid_function_name(function) {
            return Err(ScanError::InvalidFunction(function.to_string()));
        }

        let source = format!("{}{}", regex::escape(function), CALL_ARGUMENT);
        let pattern =
            Regex::new(&source).map_err(|_| ScanError::InvalidFunction(function.to_string()))?;

        Ok(Self { pattern })
    }

    /// Every key in `content`, in order of appearance. Duplicates are kept.
    pub fn extract<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

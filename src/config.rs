use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_FUNCTION, extract::is_valid_function_name};

pub const CONFIG_FILE_NAME: &str = ".potscanrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Files and directories to scan, relative to the project root.
    #[serde(default = "default_scan_targets")]
    pub scan_targets: Vec<String>,
    /// Extension of source files picked up when walking a directory.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Name of the translation function.
    #[serde(default = "default_function")]
    pub function: String,
    /// Template file to (over)write.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_scan_targets() -> Vec<String> {
    ["lib/pages", "lib/main.dart", "lib/po"]
        .map(String::from)
        .to_vec()
}

fn default_extension() -> String {
    "dart".to_string()
}

fn default_function() -> String {
    DEFAULT_FUNCTION.to_string()
}

fn default_output() -> String {
    "lib/po/app.pot".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_targets: default_scan_targets(),
            extension: default_extension(),
            function: default_function(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.scan_targets.is_empty() {
            bail!("'scanTargets' must list at least one file or directory");
        }
        if self.scan_targets.iter().any(|t| t.trim().is_empty()) {
            bail!("'scanTargets' must not contain empty paths");
        }

        if self.extension.is_empty() {
            bail!("'extension' must not be empty");
        }
        if self.extension.starts_with('.') {
            bail!(
                "'extension' should not start with a dot: \"{}\" (use \"{}\")",
                self.extension,
                self.extension.trim_start_matches('.')
            );
        }

        if !is_valid_function_name(&self.function) {
            bail!("Invalid function name in 'function': \"{}\"", self.function);
        }

        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file that was loaded, or `None` when using defaults.
    pub path: Option<PathBuf>,
    /// Directory relative paths in the config are resolved against.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
            root: start_dir.to_path_buf(),
        }),
    }
}

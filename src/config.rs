//! User configuration
//!
//! Priority: per-repo `.gitty.toml` > global `~/.config/gitty/config.toml` >
//! built-in defaults. Merging is deep: fields inside a section override
//! independently.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::diff::{DEFAULT_COLLAPSE_THRESHOLD, DEFAULT_REVEAL_BATCH};

/// Per-repo config file name
pub const LOCAL_CONFIG_FILE: &str = ".gitty.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub diff: DiffConfig,
    #[serde(default)]
    pub vim: VimConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// [diff] section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiffConfig {
    /// Minimum run of context lines that collapses
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: usize,
    /// Lines revealed per activation
    #[serde(default = "default_reveal_batch")]
    pub reveal_batch: usize,
    #[serde(default = "default_true")]
    pub line_numbers: bool,
}

/// [vim] section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VimConfig {
    #[serde(default)]
    pub enabled_on_start: bool,
}

/// [history] section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    /// Number of commits loaded into the History panel
    #[serde(default = "default_commit_limit")]
    pub commit_limit: usize,
}

fn default_collapse_threshold() -> usize {
    DEFAULT_COLLAPSE_THRESHOLD
}

fn default_reveal_batch() -> usize {
    DEFAULT_REVEAL_BATCH
}

fn default_commit_limit() -> usize {
    50
}

fn default_true() -> bool {
    true
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            collapse_threshold: default_collapse_threshold(),
            reveal_batch: default_reveal_batch(),
            line_numbers: true,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            commit_limit: default_commit_limit(),
        }
    }
}

/// Path of the global config file, if the platform has a config dir
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gitty").join("config.toml"))
}

/// Load config for the repository at `repo_root`
pub fn load_config(repo_root: &Path) -> Config {
    let global = global_config_path().and_then(|p| read_table(&p));
    let local = read_table(&repo_root.join(LOCAL_CONFIG_FILE));
    merge_tables(global, local)
}

/// Read a TOML file as a table; missing files are silent, bad files warn
fn read_table(path: &Path) -> Option<toml::Table> {
    let content = std::fs::read_to_string(path).ok()?;
    match content.parse::<toml::Table>() {
        Ok(table) => {
            debug!(path = %path.display(), "loaded config file");
            Some(table)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring invalid config file");
            None
        }
    }
}

/// Merge global and local tables into a [`Config`]
fn merge_tables(global: Option<toml::Table>, local: Option<toml::Table>) -> Config {
    let merged = match (global, local) {
        (Some(mut global), Some(local)) => {
            deep_merge(&mut global, local);
            global
        }
        (Some(global), None) => global,
        (None, Some(local)) => local,
        (None, None) => return Config::default(),
    };

    toml::Value::Table(merged).try_into().unwrap_or_else(|e| {
        warn!(error = %e, "config has invalid values, using defaults");
        Config::default()
    })
}

/// Recursively merge `overlay` into `base`
///
/// Overlay values win; nested tables are merged recursively.
fn deep_merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PageTreeError, Result};
use crate::vfs::FileSystem;

/// Top-level configuration for pagetree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTreeConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How rows are drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Markers printed per hierarchy index step
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default = "default_indent_marker")]
    pub indent_marker: String,
    /// Append `#id` to each row
    #[serde(default)]
    pub show_ids: bool,
    /// Shown for pages without a title
    #[serde(default = "default_untitled_label")]
    pub untitled_label: String,
}

/// How page files are interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingConfig {
    /// Recompute `visible_root` from the loaded pages instead of trusting the file
    #[serde(default = "default_true")]
    pub resolve_visible_roots: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn default_indent_width() -> usize {
    2
}

fn default_indent_marker() -> String {
    " ".to_string()
}

fn default_untitled_label() -> String {
    "(no title)".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            indent_marker: default_indent_marker(),
            show_ids: false,
            untitled_label: default_untitled_label(),
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            resolve_visible_roots: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PageTreeConfig {
    /// Parse config from YAML content
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load config from a specific path
    pub fn load(path: &Path, fs: &dyn FileSystem) -> Result<Self> {
        let content = fs.read_to_string(path).map_err(|source| PageTreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_yaml(&content)?)
    }
}

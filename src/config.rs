//! Palette configuration.
//!
//! A JSON document that adjusts how class colors are resolved: per-class overrides,
//! the fallback for unknown classes, and the log level of the command-line tool.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color_utils::Rgb;
use crate::resolver::{ClassColorResolver, FallbackPolicy};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Palette configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Fallback for classes without a color
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Resolve `GT_<class>` names like `<class>`
    #[serde(default = "default_ground_truth_aliases")]
    pub ground_truth_aliases: bool,

    /// Per-class colors that replace or extend the defaults
    #[serde(default)]
    pub overrides: BTreeMap<String, Rgb>,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_ground_truth_aliases() -> bool {
    true
}

impl PaletteConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            fallback: FallbackPolicy::default(),
            ground_truth_aliases: default_ground_truth_aliases(),
            overrides: BTreeMap::new(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        if config.overrides.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptyClassName);
        }

        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build a resolver that applies this configuration.
    pub fn build_resolver(&self) -> ClassColorResolver {
        self.overrides.iter().fold(
            ClassColorResolver::new()
                .with_fallback(self.fallback)
                .with_ground_truth_aliases(self.ground_truth_aliases),
            |resolver, (name, color)| resolver.with_override(name.clone(), *color),
        )
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// An override has an empty class name
    #[error("Color overrides must have a non-empty class name")]
    EmptyClassName,

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

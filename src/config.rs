// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub progress: ProgressConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Primary report file; the Jira report is written next to it
    #[serde(default = "default_output_file")]
    pub file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Tests slower than this many milliseconds are reported as slow
    #[serde(default = "default_slow")]
    pub slow: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            slow: default_slow(),
        }
    }
}

// Default values
pub const ENV_MOCHA_FILE: &str = "MOCHA_FILE";

/// Appended to the primary path to name the Jira report
pub const JIRA_SUFFIX: &str = ".jira.json";

pub fn default_output_file() -> String {
    String::from("mocha.json")
}

fn default_color() -> bool {
    true
}

pub fn default_slow() -> u64 {
    75
}

/// Destinations of the two written documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub primary: PathBuf,
    pub jira: PathBuf,
}

impl OutputPaths {
    /// Derive both destinations from the primary path.
    pub fn from_primary(primary: impl Into<PathBuf>) -> Self {
        let primary = primary.into();
        let mut jira = primary.clone().into_os_string();
        jira.push(JIRA_SUFFIX);
        Self {
            primary,
            jira: PathBuf::from(jira),
        }
    }

    /// Resolve the primary path: explicit argument, then `MOCHA_FILE`, then the config file.
    pub fn resolve(cli_output: Option<&Path>, config: Option<&Config>) -> Self {
        if let Some(path) = cli_output {
            return Self::from_primary(path);
        }
        if let Ok(file) = std::env::var(ENV_MOCHA_FILE)
            && !file.is_empty()
        {
            return Self::from_primary(file);
        }
        let file = config
            .map(|c| c.output.file.clone())
            .unwrap_or_else(default_output_file);
        Self::from_primary(file)
    }
}

/// Configuration files in lookup order:
/// 1. .bamboorc (current directory)
/// 2. ~/.bamboorc (home directory)
/// 3. .bamboorc.toml (current directory)
/// 4. ~/.bamboorc.toml (home directory)
///
/// A missing directory drops only its own entries.
pub fn candidate_paths(cwd: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    [".bamboorc", ".bamboorc.toml"]
        .into_iter()
        .flat_map(|name| [cwd.map(|dir| dir.join(name)), home.map(|dir| dir.join(name))])
        .flatten()
        .collect()
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        let cwd = std::env::current_dir().ok();
        let home = dirs::home_dir();
        if home.is_none() {
            tracing::debug!("No home directory, only checking the current directory");
        }

        candidate_paths(cwd.as_deref(), home.as_deref())
            .into_iter()
            .find(|path| path.exists())
            .and_then(|path| {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load_from_file(&path)
            })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let config = Self::parse(&content);
        if config.is_none() {
            tracing::warn!("Ignoring invalid configuration file: {}", path.display());
        }
        config
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate default configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}

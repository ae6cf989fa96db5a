//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Classification rule lists
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.endpoint.trim().is_empty() {
            return Err(AppError::validation("http.endpoint is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.filter.name_keywords.is_empty() {
            return Err(AppError::validation("No name keywords defined"));
        }
        if self.output.csv_path.as_os_str().is_empty() {
            return Err(AppError::validation("output.csv_path is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Overpass interpreter endpoint
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (the embedded query declares the same budget)
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Classification rule lists.
///
/// The defaults reproduce the fixed rule set of the tool; a config
/// file can narrow or widen them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Shop tag values accepted outright
    #[serde(default = "defaults::shop_types")]
    pub shop_types: Vec<String>,

    /// Craft tag values accepted outright
    #[serde(default = "defaults::craft_types")]
    pub craft_types: Vec<String>,

    /// Substrings matched against the lowercased name tag
    #[serde(default = "defaults::name_keywords")]
    pub name_keywords: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            shop_types: defaults::shop_types(),
            craft_types: defaults::craft_types(),
            name_keywords: defaults::name_keywords(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination for the CSV export
    #[serde(default = "defaults::csv_path")]
    pub csv_path: PathBuf,

    /// Print the human-readable report to the console
    #[serde(default = "defaults::console_enabled")]
    pub console_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: defaults::csv_path(),
            console_enabled: defaults::console_enabled(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // HTTP defaults
    pub fn endpoint() -> String {
        "https://overpass-api.de/api/interpreter".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; supplier-scout/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Filter defaults
    pub fn shop_types() -> Vec<String> {
        vec!["wholesale".into(), "trade".into(), "industrial".into()]
    }
    pub fn craft_types() -> Vec<String> {
        vec!["shoemaker".into()]
    }
    pub fn name_keywords() -> Vec<String> {
        [
            "cizmărie",
            "cizmar",
            "pantof",
            "shoe",
            "footwear",
            "piele",
            "leather",
            "material",
            "skin",
            "textil",
            "depozit",
            "warehouse",
            "wholesale",
            "en-gros",
            "angro",
            "nelucrată",
            "raw",
            "brut",
            "provizie",
            "supply",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    // Output defaults
    pub fn csv_path() -> PathBuf {
        PathBuf::from("bucharest_shoe_suppliers.csv")
    }
    pub fn console_enabled() -> bool {
        true
    }
}

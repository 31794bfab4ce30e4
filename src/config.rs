//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default postcode lookup endpoint
pub const DEFAULT_LOOKUP_URL: &str = "http://api.postcodedata.nl/v1/postcode/";

/// Default referrer sent with each lookup
pub const DEFAULT_LOOKUP_REF: &str = "domeinnaam.nl";

/// Default lookup timeout in seconds
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the lookup URL
const LOOKUP_URL_ENV: &str = "ADDRESSBOOK_LOOKUP_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Postcode lookup endpoint
    pub lookup_url: Option<String>,
    /// Referrer passed as the `ref` query parameter
    pub lookup_ref: Option<String>,
    /// Seconds before a lookup is abandoned
    pub lookup_timeout_secs: Option<u64>,
    /// Where the address book is stored
    pub address_book_path: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("nl", "addressbook", "addressbook-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the address book and log file
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Lookup URL: environment, then config file, then the default
    pub fn lookup_url(&self) -> String {
        std::env::var(LOOKUP_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| self.lookup_url.clone())
            .unwrap_or_else(|| DEFAULT_LOOKUP_URL.to_string())
    }

    pub fn lookup_ref(&self) -> &str {
        self.lookup_ref.as_deref().unwrap_or(DEFAULT_LOOKUP_REF)
    }

    pub fn lookup_timeout_secs(&self) -> u64 {
        self.lookup_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECS)
    }

    /// Address book location, falling back to the platform data dir and
    /// finally the working directory
    pub fn address_book_path(&self) -> PathBuf {
        self.address_book_path.clone().unwrap_or_else(|| {
            Self::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("address_book.json")
        })
    }
}

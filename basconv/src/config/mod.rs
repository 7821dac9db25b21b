//! Configuration management for basis-set conversion
//!
//! A YAML job file can hold every option of the command line. Values given on
//! the command line win over the file, and anything left unset falls back to
//! the defaults below.

mod args;

pub use args::Args;

use serde::{Deserialize, Serialize};

/// Main configuration structure for a conversion job
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub input: Option<String>,
    pub basis: Option<String>,
    pub elements: Option<Vec<String>>,
    pub formats: Option<Vec<String>>,
    pub destination: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub overwrite: Option<bool>,
    pub source: Option<SourceParams>,
}

/// Remote basis-set repository parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceParams {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for SourceParams {
    fn default() -> Self {
        SourceParams {
            base_url: Some("https://www.basissetexchange.org".to_string()),
            timeout_secs: Some(60),
        }
    }
}

impl SourceParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.base_url.is_none() {
            self.base_url = defaults.base_url;
        }
        if self.timeout_secs.is_none() {
            self.timeout_secs = defaults.timeout_secs;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if self.formats.is_none() {
            self.formats = Some(vec!["gaussian94".to_string()]);
        }
        if self.destination.is_none() {
            self.destination = Some(".".to_string());
        }
        if self.overwrite.is_none() {
            self.overwrite = Some(false);
        }
        self.source = Some(self.source.take().unwrap_or_default().with_defaults());
        self
    }

    pub fn base_url(&self) -> String {
        self.source
            .as_ref()
            .and_then(|s| s.base_url.clone())
            .unwrap_or_else(|| "https://www.basissetexchange.org".to_string())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.source.as_ref().and_then(|s| s.timeout_secs).unwrap_or(60)
    }
}

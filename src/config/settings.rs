// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Browser user agent sent with every search request.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Application configuration settings
///
/// Covers the page fetcher, the output location and search concurrency.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Fetcher configuration
    pub fetcher: FetcherSettings,
    /// Output configuration
    pub output: OutputSettings,
    /// Search configuration
    pub search: SearchSettings,
}

/// Page fetcher configuration settings
#[derive(Debug, Deserialize)]
pub struct FetcherSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent header value
    pub user_agent: String,
}

/// Output configuration settings
#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    /// Output directory, created on demand
    pub dir: String,
    /// Default output file name
    pub file: String,
}

/// Search configuration settings
#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    /// Ceiling on concurrently in-flight words
    pub word_concurrency: usize,
}

impl Settings {
    /// Create a new settings instance
    ///
    /// Loads defaults, an optional `config/default` file and
    /// `MULTISEARCHER__`-prefixed environment overrides.
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Default fetcher settings
            .set_default("fetcher.timeout_secs", 10)?
            .set_default("fetcher.user_agent", DEFAULT_USER_AGENT)?
            // Default output settings
            .set_default("output.dir", "output")?
            .set_default("output.file", "output.txt")?
            // Default search settings
            .set_default("search.word_concurrency", 1)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("MULTISEARCHER").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Resolve the output file path, honoring a CLI override of the file
    /// name while keeping the configured output directory.
    pub fn output_path(&self, file_override: Option<&str>) -> PathBuf {
        PathBuf::from(&self.output.dir).join(file_override.unwrap_or(&self.output.file))
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single page retrieval.
///
/// Every transport-level problem is reported as a value, never a panic:
/// the caller decides whether to skip the page and continue.
#[derive(Debug, Error, Clone)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Boundary adapter for HTML retrieval.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one results page, returning the raw markup.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

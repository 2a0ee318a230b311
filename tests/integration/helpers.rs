// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use multisearcher::domain::search::{FetchError, PageFetcher};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// Returns the same canned markup for every page and counts calls.
pub struct StubFetcher {
    markup: String,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new(markup: &str) -> Self {
        Self {
            markup: markup.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.markup.clone())
    }
}

/// Write a dork file with the given raw content.
pub fn dork_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create dork file");
    file.write_all(content.as_bytes()).expect("write dork file");
    file
}

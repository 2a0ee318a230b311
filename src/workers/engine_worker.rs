// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::filter::LinkFilter;
use crate::domain::search::{EngineDescriptor, PageFetcher};
use crate::infrastructure::extract::extract_hrefs;
use crate::infrastructure::sink::LinkSink;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Drives one engine's full page range for one word.
///
/// The `seen` set is owned by this worker alone, so the dedup scope is
/// exactly (word, engine) and no locking is needed. Pages are processed
/// in ascending order; a failed page is logged and skipped, it never
/// aborts the rest of the sweep.
pub struct EngineWorker {
    word: String,
    descriptor: EngineDescriptor,
    fetcher: Arc<dyn PageFetcher>,
    sink: Arc<LinkSink>,
    filter: Arc<LinkFilter>,
    seen: HashSet<String>,
}

impl EngineWorker {
    pub fn new(
        word: String,
        descriptor: EngineDescriptor,
        fetcher: Arc<dyn PageFetcher>,
        sink: Arc<LinkSink>,
        filter: Arc<LinkFilter>,
    ) -> Self {
        Self {
            word,
            descriptor,
            fetcher,
            sink,
            filter,
            seen: HashSet::new(),
        }
    }

    /// Sweep the engine's page sequence, emitting accepted links to the
    /// sink and one progress line per page to stdout.
    pub async fn run(mut self) {
        for page in self.descriptor.pages() {
            println!("{}", self.descriptor.progress_line(page, &self.word));

            let url = self.descriptor.search_url(&self.word, page);
            let markup = match self.fetcher.fetch(&url).await {
                Ok(markup) => markup,
                Err(e) => {
                    warn!(
                        engine = self.descriptor.id.name(),
                        page, "page fetch failed: {}", e
                    );
                    continue;
                }
            };

            for href in extract_hrefs(&markup) {
                if !self.filter.is_valid(Some(&href), &self.seen) {
                    continue;
                }
                self.seen.insert(href.clone());
                if let Err(e) = self.sink.append(&href).await {
                    warn!(
                        engine = self.descriptor.id.name(),
                        link = %href,
                        "dropping link after sink failure: {}", e
                    );
                }
            }
        }

        debug!(
            engine = self.descriptor.id.name(),
            word = %self.word,
            accepted = self.seen.len(),
            "engine sweep complete"
        );
    }
}

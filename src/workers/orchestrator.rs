// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::filter::LinkFilter;
use crate::domain::search::{EngineCatalog, EngineDescriptor, PageFetcher};
use crate::infrastructure::sink::LinkSink;
use crate::workers::engine_worker::EngineWorker;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Counts reported once every scheduled task reached a terminal state.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Words actually scheduled (blank lines excluded).
    pub words: usize,
    /// (word, engine) tasks driven to completion or reported failure.
    pub tasks: usize,
    pub elapsed: Duration,
}

/// Top-level scheduler for the whole dork list.
///
/// Two-level fan-out: every enabled engine runs concurrently for one word,
/// and the number of in-flight words is bounded by a semaphore so a large
/// dork list cannot grow connections without limit. Engine count is small
/// and fixed, so no extra limiting is applied at that level.
pub struct SearchOrchestrator {
    catalog: EngineCatalog,
    fetcher: Arc<dyn PageFetcher>,
    sink: Arc<LinkSink>,
    filter: Arc<LinkFilter>,
    word_concurrency: usize,
}

impl SearchOrchestrator {
    pub fn new(
        catalog: EngineCatalog,
        fetcher: Arc<dyn PageFetcher>,
        sink: Arc<LinkSink>,
        filter: Arc<LinkFilter>,
        word_concurrency: usize,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            sink,
            filter,
            word_concurrency: word_concurrency.max(1),
        }
    }

    /// Run every word against every enabled engine and wait for all of it.
    ///
    /// Words are submitted in input order; completion order is
    /// unconstrained. A word's transient fetch errors never stop other
    /// words: the only terminal condition is every (word, engine) pair
    /// finishing.
    pub async fn run(&self, words: &[String]) -> RunSummary {
        let started = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.word_concurrency));
        let mut tasks: JoinSet<()> = JoinSet::new();

        let mut scheduled_words = 0;
        let mut scheduled_tasks = 0;

        for word in words {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }

            let engines: Vec<EngineDescriptor> = self.catalog.enabled().cloned().collect();
            if engines.is_empty() {
                warn!("no engines enabled, nothing to schedule");
                break;
            }
            scheduled_words += 1;
            scheduled_tasks += engines.len();

            // Acquiring before spawning bounds in-flight words without
            // piling up idle tasks.
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .expect("semaphore is never closed");

            let word = word.to_string();
            let fetcher = self.fetcher.clone();
            let sink = self.sink.clone();
            let filter = self.filter.clone();

            tasks.spawn(async move {
                let _permit = permit;
                let workers = engines.into_iter().map(|descriptor| {
                    EngineWorker::new(
                        word.clone(),
                        descriptor,
                        fetcher.clone(),
                        sink.clone(),
                        filter.clone(),
                    )
                    .run()
                });
                futures::future::join_all(workers).await;
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("word task failed to join: {}", e);
            }
        }

        let summary = RunSummary {
            words: scheduled_words,
            tasks: scheduled_tasks,
            elapsed: started.elapsed(),
        };
        info!(
            words = summary.words,
            tasks = summary.tasks,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "all scheduled work finished"
        );
        summary
    }
}

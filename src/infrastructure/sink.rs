// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

/// Persistence failure of the output file.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to prepare output location {path}: {source}")]
    NotReady {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to append link: {0}")]
    Append(std::io::Error),
}

/// Append-only sink for accepted links, shared by every worker.
///
/// All mutation goes through one mutex-guarded file handle: each accepted
/// link is written as a single full line before another writer may
/// interleave. Append is the only operation; nothing is ever updated or
/// deleted.
pub struct LinkSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl LinkSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Idempotently create the output directory and open the file for
    /// appending. Called once at startup so an unusable sink is fatal
    /// before any work is scheduled.
    pub async fn ensure_ready(&self) -> Result<(), SinkError> {
        let mut guard = self.file.lock().await;
        if guard.is_none() {
            *guard = Some(self.open().await?);
        }
        Ok(())
    }

    /// Append one accepted link as a full `link\n` line.
    ///
    /// A transient write failure is retried exactly once on a fresh handle;
    /// a second failure is reported and the link dropped, never silently
    /// duplicated.
    pub async fn append(&self, link: &str) -> Result<(), SinkError> {
        let mut guard = self.file.lock().await;
        if guard.is_none() {
            *guard = Some(self.open().await?);
        }
        let file = guard.as_mut().expect("sink file opened above");

        let line = format!("{}\n", link);
        if let Err(first) = Self::write_line(file, &line).await {
            warn!("retrying append after write error: {}", first);
            *guard = Some(self.open().await?);
            let file = guard.as_mut().expect("sink file reopened above");
            Self::write_line(file, &line).await.map_err(SinkError::Append)?;
        }
        Ok(())
    }

    async fn write_line(file: &mut File, line: &str) -> Result<(), std::io::Error> {
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }

    async fn open(&self) -> Result<File, SinkError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).await.map_err(|e| SinkError::NotReady {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| SinkError::NotReady {
                path: self.path.clone(),
                source: e,
            })
    }
}

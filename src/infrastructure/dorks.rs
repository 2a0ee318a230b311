// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dork list loading failure. Fatal: nothing is scheduled without input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("dork file {path} not found")]
    NotFound { path: PathBuf },
    #[error("failed to read dork file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the dork list: one phrase per line, trimmed, blank lines skipped.
pub fn load_dorks(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Domains that never count as usable results: the search engines themselves,
/// big portals and social platforms that dominate result pages.
pub const DEFAULT_EXCLUDE_PATTERN: &str = "msn|microsoft|php-brasil|facebook|\
4shared|bing|imasters|phpbrasil|php.net|yahoo|\
scrwordtbrasil|under-linux|google|msdn|ask|\
bing|rambler|youtube";

static DEFAULT_EXCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_EXCLUDE_PATTERN).expect("Failed to compile exclude regex"));

/// Decides whether a candidate href counts as a usable result.
///
/// A candidate passes when it is present, looks like an absolute web URL,
/// matches no exclude rule and has not been seen before in the caller's
/// dedup scope. Pure predicate: no side effects, same inputs same answer.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    exclude: Regex,
}

impl LinkFilter {
    /// Build a filter from a custom exclude pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            exclude: Regex::new(pattern)?,
        })
    }

    pub fn is_valid(&self, candidate: Option<&str>, seen: &HashSet<String>) -> bool {
        match candidate {
            Some(link) => {
                link.contains("http") && !self.exclude.is_match(link) && !seen.contains(link)
            }
            None => false,
        }
    }
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE.clone(),
        }
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Hard upper bound on the Bing page pointer; Bing pages step by 10.
const BING_PAGE_LIMIT: u32 = 411;
/// Hard upper bound on Ask pagination.
const ASK_PAGE_LIMIT: u32 = 20;
/// Hard upper bound on Rambler pagination.
const RAMBLER_PAGE_LIMIT: u32 = 20;

/// Search engine identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineId {
    Bing,
    Ask,
    Rambler,
}

impl EngineId {
    /// Get the engine name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bing => "bing",
            Self::Ask => "ask",
            Self::Rambler => "rambler",
        }
    }

    /// Display label used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bing => "Bing",
            Self::Ask => "Ask",
            Self::Rambler => "Rambler",
        }
    }

    /// Parse an engine identifier from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bing" => Some(Self::Bing),
            "ask" => Some(Self::Ask),
            "rambler" => Some(Self::Rambler),
            _ => None,
        }
    }
}

/// One registered search engine: its URL grammar and pagination bounds.
///
/// Each engine has a distinct URL grammar, pagination stride and a hard
/// upper bound on pages to probe. These bounds are configuration constants,
/// never derived at runtime.
#[derive(Debug, Clone)]
pub struct EngineDescriptor {
    pub id: EngineId,
    /// Disabled engines keep their registration but are skipped by workers.
    pub enabled: bool,
    page_start: u32,
    page_limit: u32,
    page_step: u32,
}

impl EngineDescriptor {
    fn new(id: EngineId, page_start: u32, page_limit: u32, page_step: u32) -> Self {
        Self {
            id,
            enabled: true,
            page_start,
            page_limit,
            page_step,
        }
    }

    /// Upper pagination bound, shown as the denominator in progress lines.
    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// The finite, ascending sequence of page indices to probe.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        (self.page_start..self.page_limit).step_by(self.page_step as usize)
    }

    /// Build the request URL for one (word, page) pair.
    ///
    /// The word is percent-encoded; the page index is substituted into the
    /// engine's own pagination parameter.
    pub fn search_url(&self, word: &str, page: u32) -> String {
        let word = urlencoding::encode(word);
        match self.id {
            EngineId::Bing => format!(
                "http://www.bing.com/search?q={}&count=50&first={}&rdr=1",
                word, page
            ),
            EngineId::Ask => format!("http://www.ask.com/web?q={}&page={}", word, page),
            EngineId::Rambler => {
                format!("http://nova.rambler.ru/search?query={}&page={}", word, page)
            }
        }
    }

    /// Human-readable progress line for one page of one word.
    pub fn progress_line(&self, page: u32, word: &str) -> String {
        format!(
            "[{}] Quering page {}/{} with dork {}",
            self.id.label(),
            page,
            self.page_limit,
            word
        )
    }
}

/// Static registry of search engines.
///
/// Intentionally small and explicit: adding an engine means registering a
/// new entry here. Entries can be disabled without deleting their
/// definition, preserving historical configuration.
#[derive(Debug, Clone)]
pub struct EngineCatalog {
    entries: Vec<EngineDescriptor>,
}

impl EngineCatalog {
    pub fn new(entries: Vec<EngineDescriptor>) -> Self {
        Self { entries }
    }

    /// Iterate over all registered engines, disabled ones included.
    pub fn entries(&self) -> impl Iterator<Item = &EngineDescriptor> {
        self.entries.iter()
    }

    /// Iterate over the engines that workers should actually run.
    pub fn enabled(&self) -> impl Iterator<Item = &EngineDescriptor> {
        self.entries.iter().filter(|e| e.enabled)
    }

    pub fn get(&self, id: EngineId) -> Option<&EngineDescriptor> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Toggle an engine without removing its registration.
    pub fn set_enabled(&mut self, id: EngineId, enabled: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.enabled = enabled;
        }
    }
}

impl Default for EngineCatalog {
    fn default() -> Self {
        Self::new(vec![
            EngineDescriptor::new(EngineId::Bing, 1, BING_PAGE_LIMIT, 10),
            EngineDescriptor::new(EngineId::Ask, 1, ASK_PAGE_LIMIT, 1),
            EngineDescriptor::new(EngineId::Rambler, 1, RAMBLER_PAGE_LIMIT, 1),
        ])
    }
}

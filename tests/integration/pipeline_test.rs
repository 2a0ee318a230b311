// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{dork_file, StubFetcher};
use multisearcher::domain::filter::LinkFilter;
use multisearcher::domain::search::{EngineCatalog, EngineId};
use multisearcher::infrastructure::dorks::{load_dorks, InputError};
use multisearcher::infrastructure::sink::LinkSink;
use multisearcher::workers::SearchOrchestrator;
use std::sync::Arc;

const RESULT_MARKUP: &str = r#"
    <html><body>
        <a href="http://good.com/x">result</a>
        <a href="http://bing.com/y">engine noise</a>
        <a href="http://good.com/x">duplicate</a>
    </body></html>
"#;

fn ask_only_catalog() -> EngineCatalog {
    let mut catalog = EngineCatalog::default();
    catalog.set_enabled(EngineId::Bing, false);
    catalog.set_enabled(EngineId::Rambler, false);
    catalog
}

#[tokio::test]
async fn test_scenario_single_word_dedup_and_exclude() {
    let dorks = dork_file("test\n");
    let words = load_dorks(dorks.path()).expect("load dorks");
    assert_eq!(words, vec!["test"]);

    let dir = tempfile::tempdir().expect("tempdir");
    let sink = Arc::new(LinkSink::new(dir.path().join("output.txt")));
    let fetcher = Arc::new(StubFetcher::new(RESULT_MARKUP));

    let orchestrator = SearchOrchestrator::new(
        ask_only_catalog(),
        fetcher.clone(),
        sink.clone(),
        Arc::new(LinkFilter::default()),
        1,
    );
    orchestrator.run(&words).await;

    // The engine noise link is excluded, the duplicate suppressed: the
    // whole sweep persists exactly one line.
    let content = std::fs::read_to_string(sink.path()).expect("read output");
    assert_eq!(content, "http://good.com/x\n");
}

#[tokio::test]
async fn test_scenario_blank_line_is_skipped() {
    let dorks = dork_file("\ntest\n");
    let words = load_dorks(dorks.path()).expect("load dorks");
    assert_eq!(words, vec!["test"]);

    let dir = tempfile::tempdir().expect("tempdir");
    let sink = Arc::new(LinkSink::new(dir.path().join("output.txt")));
    let fetcher = Arc::new(StubFetcher::new(RESULT_MARKUP));

    let orchestrator = SearchOrchestrator::new(
        ask_only_catalog(),
        fetcher.clone(),
        sink.clone(),
        Arc::new(LinkFilter::default()),
        1,
    );
    let summary = orchestrator.run(&words).await;

    assert_eq!(summary.words, 1);
    // Ask probes pages 1..19 for the single valid word.
    assert_eq!(fetcher.calls(), 19);
}

#[tokio::test]
async fn test_scenario_missing_dork_file_fetches_nothing() {
    let fetcher = Arc::new(StubFetcher::new(RESULT_MARKUP));

    let result = load_dorks("/no/such/dorks.txt");
    assert!(matches!(result, Err(InputError::NotFound { .. })));

    // Startup fails before the orchestrator exists, so no network
    // activity can have happened.
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_dedup_scope_does_not_leak_across_engines() {
    let dorks = dork_file("test\n");
    let words = load_dorks(dorks.path()).expect("load dorks");

    let mut catalog = EngineCatalog::default();
    catalog.set_enabled(EngineId::Bing, false);

    let dir = tempfile::tempdir().expect("tempdir");
    let sink = Arc::new(LinkSink::new(dir.path().join("output.txt")));
    let fetcher = Arc::new(StubFetcher::new(r#"<a href="http://good.com/x">r</a>"#));

    let orchestrator = SearchOrchestrator::new(
        catalog,
        fetcher,
        sink.clone(),
        Arc::new(LinkFilter::default()),
        1,
    );
    orchestrator.run(&words).await;

    // Ask and Rambler each own their seen set, so both report the link.
    let content = std::fs::read_to_string(sink.path()).expect("read output");
    let hits = content
        .lines()
        .filter(|line| *line == "http://good.com/x")
        .count();
    assert_eq!(hits, 2);
}

#[tokio::test]
async fn test_output_lines_are_bare_links() {
    let dorks = dork_file("test\n");
    let words = load_dorks(dorks.path()).expect("load dorks");

    let dir = tempfile::tempdir().expect("tempdir");
    let sink = Arc::new(LinkSink::new(dir.path().join("output.txt")));
    let markup = r#"
        <a href="http://alpha.org/1">a</a>
        <a href="http://beta.org/2">b</a>
    "#;

    let orchestrator = SearchOrchestrator::new(
        ask_only_catalog(),
        Arc::new(StubFetcher::new(markup)),
        sink.clone(),
        Arc::new(LinkFilter::default()),
        1,
    );
    orchestrator.run(&words).await;

    let content = std::fs::read_to_string(sink.path()).expect("read output");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["http://alpha.org/1", "http://beta.org/2"]);
}

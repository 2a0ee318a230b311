// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use multisearcher::config::Settings;
use multisearcher::domain::filter::LinkFilter;
use multisearcher::domain::search::{EngineCatalog, PageFetcher};
use multisearcher::infrastructure::dorks;
use multisearcher::infrastructure::http_fetcher::HttpFetcher;
use multisearcher::infrastructure::sink::LinkSink;
use multisearcher::utils::telemetry;
use multisearcher::workers::SearchOrchestrator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

const BANNER: &str = r#"
  __  __       _ _   _  _____                     _
 |  \/  |     | | | (_)/ ____|                   | |
 | \  / |_   _| | |_ _| (___   ___  __ _ _ __ ___| |__   ___ _ __
 | |\/| | | | | | __| |\___ \ / _ \/ _` | '__/ __| '_ \ / _ \ '__|
 | |  | | |_| | | |_| |____) |  __/ (_| | | | (__| | | |  __/ |
 |_|  |_|\__,_|_|\__|_|_____/ \___|\__,_|_|  \___|_| |_|\___|_|
"#;

/// Multi searcher: scans search engines for web sites matching dorks.
#[derive(Parser, Debug)]
#[command(name = "multisearcher", version, about = "Procz Multi Searcher")]
struct Args {
    /// List with dorks to scan (one per line)
    #[arg(short = 'f', long = "file")]
    dork_file: PathBuf,

    /// Output file to save valid results
    #[arg(short, long)]
    output: Option<String>,

    /// Concurrent workers (by word)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let args = Args::parse();

    let settings = Settings::new()?;

    // Fatal before any work is scheduled: no input, nothing to do.
    let words = dorks::load_dorks(&args.dork_file)?;

    println!("{}", BANNER);

    // Fatal before any work is scheduled: nothing could be persisted.
    let sink = Arc::new(LinkSink::new(settings.output_path(args.output.as_deref())));
    sink.ensure_ready().await?;

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::from_settings(&settings.fetcher));
    let filter = Arc::new(LinkFilter::default());
    let catalog = EngineCatalog::default();
    let concurrency = args.threads.unwrap_or(settings.search.word_concurrency);

    info!(
        dorks = words.len(),
        concurrency,
        output = %sink.path().display(),
        "starting scan"
    );

    let orchestrator = SearchOrchestrator::new(catalog, fetcher, sink, filter, concurrency);
    let summary = orchestrator.run(&words).await;

    println!("Finished! ({:.1}s elapsed)", summary.elapsed.as_secs_f64());
    Ok(())
}

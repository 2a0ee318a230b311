// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Infrastructure layer module
///
/// Technical implementations behind the domain boundaries: the HTTP page
/// fetcher, HTML anchor extraction, the append-only link sink and dork
/// list loading.
pub mod dorks;
pub mod extract;
pub mod http_fetcher;
pub mod sink;

pub use dorks::{load_dorks, InputError};
pub use http_fetcher::HttpFetcher;
pub use sink::{LinkSink, SinkError};

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};

/// Extract every anchor href from a results page, in document order.
///
/// Markup with no anchors is a normal empty result. The parser is lenient,
/// so malformed markup degrades to fewer hrefs rather than an error.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor = Selector::parse("a[href]").expect("Failed to compile anchor selector");

    document
        .select(&anchor)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_owned)
        .collect()
}

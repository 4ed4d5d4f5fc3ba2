use crate::config::ExtractConfig;
use crate::engine::aggregate;
use crate::feed::extractor_for;
use crate::feed::pages::PageSnapshot;
use crate::feed::types::{OddsRecord, Sportsbook};
use anyhow::{Context, Result};
use futures_util::future::join_all;
use std::time::Instant;

fn book_rank(book: Sportsbook) -> usize {
    Sportsbook::ALL
        .iter()
        .position(|b| *b == book)
        .unwrap_or(Sportsbook::ALL.len())
}

/// Run one book's extractor over its page.
pub fn extract_page(page: &PageSnapshot, config: &ExtractConfig) -> Vec<OddsRecord> {
    let started = Instant::now();
    let extractor = extractor_for(page.sportsbook, config);
    let book = extractor.sportsbook();
    let records = extractor.extract(&page.html);
    if records.is_empty() {
        tracing::warn!(%book, bytes = page.html.len(), "no lines found on page");
    } else {
        tracing::info!(
            %book,
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "extracted lines"
        );
    }
    records
}

/// Extract every page on a blocking worker and aggregate the results.
///
/// Pages are independent, so they are parsed in parallel; the output is
/// still ordered by `Sportsbook::ALL`, then by input order for repeats.
pub async fn extract_all(pages: &[PageSnapshot], config: &ExtractConfig) -> Result<Vec<OddsRecord>> {
    let mut ordered: Vec<&PageSnapshot> = pages.iter().collect();
    ordered.sort_by_key(|p| book_rank(p.sportsbook));

    let tasks = ordered.into_iter().map(|page| {
        let page = page.clone();
        let config = config.clone();
        tokio::task::spawn_blocking(move || extract_page(&page, &config))
    });

    let mut per_book = Vec::with_capacity(pages.len());
    for joined in join_all(tasks).await {
        per_book.push(joined.context("extraction task panicked")?);
    }

    Ok(aggregate(per_book))
}

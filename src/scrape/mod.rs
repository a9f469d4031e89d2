// src/scrape/mod.rs
// Orchestration: listing → detail links → pooled fetch + extract → DataSet.

mod pool;
pub mod bouts;
pub mod fighters;

pub use pool::{run_ordered, OnError, PoolConfig};

use tracing::info;

use crate::{
    config::{options::{PageKind, ScrapeOptions}, SiteConfig},
    core::{fetch_document, PageSource},
    dataset::DataSet,
    error::Result,
    progress::Progress,
    report::RunReport,
    specs::events::{parse_listing, EventLink},
};

/// One finished pipeline.
#[derive(Debug)]
pub struct Collected {
    pub kind: PageKind,
    pub data: DataSet,
    pub report: RunReport,
}

/// Fetch the completed-events listing; keep at most `max_events` of it.
/// Any failure here is fatal for the run.
pub fn fetch_listing(
    source: &dyn PageSource,
    site: &SiteConfig,
    max_events: Option<usize>,
) -> Result<Vec<EventLink>> {
    let doc = fetch_document(source, &site.listing_url)?;
    let mut events = parse_listing(&doc, &site.classes)?;
    if let Some(n) = max_events {
        events.truncate(n);
    }
    info!(events = events.len(), url = %site.listing_url, "listing loaded");
    Ok(events)
}

/// Run every selected pipeline against one listing fetch, in selection order.
pub fn run(
    source: &dyn PageSource,
    site: &SiteConfig,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<Vec<Collected>> {
    progress.log("Loading event listing…");
    let events = fetch_listing(source, site, opts.max_events)?;

    let mut out = Vec::new();
    for kind in opts.pages.kinds() {
        let (data, report) = match kind {
            PageKind::Fighters => fighters::collect(source, site, opts, &events, progress)?,
            PageKind::Bouts => bouts::collect(source, site, opts, &events, progress)?,
        };
        info!(rows = data.len(), "{report}");
        out.push(Collected { kind, data, report });
    }
    Ok(out)
}

fn pool_config(opts: &ScrapeOptions, on_error: OnError) -> PoolConfig {
    PoolConfig { workers: opts.workers, pause_ms: opts.pause_ms, on_error }
}

/// Unwrap an abort-policy batch: every value in order, or the first error.
fn all_or_first_error<R>(results: Vec<(usize, Result<R>)>) -> Result<Vec<R>> {
    results.into_iter().map(|(_, r)| r).collect()
}

// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::consts::{DEFAULT_OUT_DIR, LISTING_URL, REQUEST_PAUSE_MS, WORKERS};
use crate::config::options::{AppOptions, ExportFormat, ExportOptions, PageKind, PageSelector, ScrapeOptions};
use crate::config::SiteConfig;
use crate::core::HttpFetcher;
use crate::error::Result;
use crate::file::{export_dataset, normalize_dir_path};
use crate::progress::Progress;
use crate::scrape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Fighters,
    Bouts,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

/// Scrape fighter profiles and bout statistics from ufcstats.com into CSV/TSV tables.
#[derive(Debug, Parser)]
#[command(name = "ufc_scrape", version, about)]
pub struct Cli {
    /// Which table(s) to build.
    #[arg(long, value_enum, default_value_t = PageArg::All)]
    pub page: PageArg,

    /// Output directory.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: String,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Omit the header line.
    #[arg(long)]
    pub no_headers: bool,

    /// Detail pages fetched concurrently (1 = sequential).
    #[arg(long, default_value_t = WORKERS, value_parser = parse_workers)]
    pub workers: usize,

    /// Only crawl the first N listed events.
    #[arg(long)]
    pub max_events: Option<usize>,

    #[arg(long, env = "UFC_SCRAPE_LISTING_URL", default_value = LISTING_URL)]
    pub listing_url: String,

    /// Per-request timeout; no timeout when omitted.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Also append log lines to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_workers(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(s!("must be at least 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig::default()
            .with_listing_url(self.listing_url.clone())
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }

    pub fn app_options(&self) -> AppOptions {
        let pages = match self.page {
            PageArg::Fighters => PageSelector::One(PageKind::Fighters),
            PageArg::Bouts => PageSelector::One(PageKind::Bouts),
            PageArg::All => PageSelector::All,
        };
        AppOptions {
            scrape: ScrapeOptions {
                pages,
                workers: self.workers,
                pause_ms: REQUEST_PAUSE_MS,
                max_events: self.max_events,
            },
            export: ExportOptions {
                format: match self.format {
                    FormatArg::Csv => ExportFormat::Csv,
                    FormatArg::Tsv => ExportFormat::Tsv,
                },
                dir: normalize_dir_path(&self.out),
                include_headers: !self.no_headers,
            },
        }
    }
}

/// Terminal progress: one bar per stage.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg:<24} {spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>6}/{len:6} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

impl Progress for BarProgress {
    fn begin(&mut self, stage: &str, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(bar_style());
        pb.set_message(s!(stage));
        self.bar = Some(pb);
    }

    fn log(&mut self, msg: &str) {
        match &self.bar {
            Some(pb) => pb.println(msg),
            None => eprintln!("{msg}"),
        }
    }

    fn item_done(&mut self, _label: &str) {
        if let Some(pb) = &self.bar { pb.inc(1); }
    }

    fn item_failed(&mut self, label: &str) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
            pb.set_message(format!("failed: {label}"));
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.bar.take() { pb.finish_and_clear(); }
    }
}

/// Crawl, export every selected table, print the run summaries.
/// Nothing is written unless every selected pipeline finished.
pub fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    let site = cli.site_config();
    let opts = cli.app_options();
    let fetcher = HttpFetcher::new(&site)?;

    let mut progress = BarProgress::default();
    let collected = scrape::run(&fetcher, &site, &opts.scrape, &mut progress)?;

    let mut written = Vec::with_capacity(collected.len());
    for c in &collected {
        let path = export_dataset(&opts.export, c.kind, &c.data)?;
        info!(path = %path.display(), rows = c.data.len(), "wrote {}", c.kind.label());
        println!("Wrote {} ({} rows)", path.display(), c.data.len());
        println!("{}", c.report);
        written.push(path);
    }
    Ok(written)
}

// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Fighters,
    Bouts,
}

impl PageKind {
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Fighters => "fighters",
            PageKind::Bouts => "bouts",
        }
    }

    pub fn default_stem(&self) -> &'static str {
        match self {
            PageKind::Fighters => FIGHTERS_FILE,
            PageKind::Bouts => BOUTS_FILE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSelector {
    All,
    One(PageKind),
}

impl PageSelector {
    pub fn kinds(&self) -> Vec<PageKind> {
        match self {
            PageSelector::All => vec![PageKind::Fighters, PageKind::Bouts],
            PageSelector::One(kind) => vec![*kind],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub pages: PageSelector,
    /// Detail-page fetches in flight at once. 1 = fully sequential.
    pub workers: usize,
    /// Pause after every request, per worker.
    pub pause_ms: u64,
    /// Only crawl the first N listed events.
    pub max_events: Option<usize>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            pages: PageSelector::All,
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
            max_events: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>` for the given page.
    pub fn out_path(&self, kind: PageKind) -> PathBuf {
        self.dir.join(join!(kind.default_stem(), ".", self.format.ext()))
    }
}

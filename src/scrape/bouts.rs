// src/scrape/bouts.rs
// Bout pipeline: event pages → bout links → bout pages → typed table.
// Event failures abort; a failing bout is skipped and lands in the run report.

use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::{
    config::{options::ScrapeOptions, SiteConfig},
    core::{fetch_document, sanitize::is_placeholder, PageSource},
    dataset::{Cell, Column, ColumnKind, DataSet},
    error::Result,
    progress::Progress,
    report::RunReport,
    specs::{
        bouts::{parse_bout, BoutRecord, BoutRef, Corner, CHART_AREAS, SIG_AREAS, TOTAL_STATS},
        events::{parse_bout_links, EventLink},
    },
};

use super::{all_or_first_error, pool_config, run_ordered, OnError};

/// Bump when `bout_columns` changes.
pub const BOUT_SCHEMA_VERSION: u32 = 1;

/// Listing date format, e.g. `June 29, 2024`.
const DATE_FORMAT: &str = "%B %d, %Y";

const HEADER_COLUMNS: [(&str, ColumnKind); 14] = [
    ("date", ColumnKind::Date),
    ("event_url", ColumnKind::Text),
    ("event_fight", ColumnKind::Text),
    ("f1_status_fg", ColumnKind::Text),
    ("f2_status_fg", ColumnKind::Text),
    ("f1_fullname", ColumnKind::Text),
    ("f2_fullname", ColumnKind::Text),
    ("f1_nickname", ColumnKind::Text),
    ("f2_nickname", ColumnKind::Text),
    ("win_method", ColumnKind::Text),
    ("round", ColumnKind::Int),
    ("time", ColumnKind::Time),
    ("time_format", ColumnKind::Text),
    ("referee", ColumnKind::Text),
];

/// Every bout link across `events`, in listing then page order.
pub fn discover_bout_links(
    source: &dyn PageSource,
    site: &SiteConfig,
    opts: &ScrapeOptions,
    events: &[EventLink],
    progress: &mut dyn Progress,
) -> Result<Vec<BoutRef>> {
    progress.begin("event pages (bouts)", events.len());
    let results = run_ordered(
        events,
        pool_config(opts, OnError::Abort),
        progress,
        |ev| ev.url.clone(),
        |ev| {
            let doc = fetch_document(source, &ev.url)?;
            parse_bout_links(&doc, &site.classes)
        },
    );
    progress.finish();

    let per_event = all_or_first_error(results)?;
    Ok(events
        .iter()
        .zip(per_event)
        .flat_map(|(ev, urls)| {
            urls.into_iter().map(move |bout_url| BoutRef {
                date: ev.date.clone(),
                event_url: ev.url.clone(),
                bout_url,
            })
        })
        .collect())
}

pub fn extract_bout(source: &dyn PageSource, site: &SiteConfig, bout: &BoutRef) -> Result<BoutRecord> {
    let doc = fetch_document(source, &bout.bout_url)?;
    parse_bout(&doc, site, bout.clone())
}

/// Published column list for `num_rounds` round groups.
pub fn bout_columns(num_rounds: usize) -> Vec<Column> {
    let mut cols: Vec<Column> = HEADER_COLUMNS
        .iter()
        .map(|(name, kind)| Column::new(*name, *kind))
        .collect();

    let text = |name: String| Column::new(name, ColumnKind::Text);
    for n in 1..=2 {
        cols.extend(TOTAL_STATS.iter().map(|(stat, _)| text(format!("f{n}_{stat}"))));
        for r in 1..=num_rounds {
            cols.extend(TOTAL_STATS.iter().map(|(stat, _)| text(format!("f{n}_rnd{r}_{stat}"))));
        }
        cols.extend(SIG_AREAS.iter().map(|(area, _)| text(format!("f{n}_sig_str_{area}"))));
        for r in 1..=num_rounds {
            cols.extend(SIG_AREAS.iter().map(|(area, _)| text(format!("f{n}_rnd{r}_sig_str_{area}"))));
        }
    }
    for area in CHART_AREAS {
        cols.push(text(format!("f1_land_trg_{area}")));
        cols.push(text(format!("f2_land_trg_{area}")));
    }
    cols
}

/// `"--"` is the site's "no data"; the round-padding sentinel is kept as is.
fn text_cell(raw: &str) -> Cell {
    if is_placeholder(raw) { Cell::Null } else { Cell::Text(s!(raw)) }
}

/// `M:SS` bout clock → `00:M:SS`. The two fields are minutes and seconds
/// into the round, never hours and minutes.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let (m, s) = raw.trim().split_once(':')?;
    NaiveTime::from_hms_opt(0, m.trim().parse().ok()?, s.trim().parse().ok()?)
}

pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn corner_cells(c: &Corner, out: &mut Vec<Cell>) {
    out.extend(c.totals.iter().map(|v| text_cell(v)));
    for round in &c.rounds {
        out.extend(round.iter().map(|v| text_cell(v)));
    }
    out.extend(c.sig_totals.iter().map(|v| text_cell(v)));
    for round in &c.sig_rounds {
        out.extend(round.iter().map(|v| text_cell(v)));
    }
}

/// One typed row. Unparseable `date`/`time` become null with a warning.
pub fn bout_row(rec: &BoutRecord) -> Vec<Cell> {
    let [f1, f2] = &rec.corners;
    let src = &rec.source;

    let date = match parse_event_date(&src.date) {
        Some(d) => Cell::Date(d),
        None => {
            warn!(date = %src.date, bout = %src.bout_url, "unparseable event date");
            Cell::Null
        }
    };
    let time = match parse_clock(&rec.time) {
        Some(t) => Cell::Time(t),
        None => {
            if !is_placeholder(&rec.time) {
                warn!(time = %rec.time, bout = %src.bout_url, "unparseable bout time");
            }
            Cell::Null
        }
    };

    let mut row = vec![
        date,
        text_cell(&src.event_url),
        text_cell(&src.bout_url),
        text_cell(&f1.status),
        text_cell(&f2.status),
        text_cell(&f1.name),
        text_cell(&f2.name),
        text_cell(&f1.nickname),
        text_cell(&f2.nickname),
        text_cell(&rec.method),
        Cell::Int(rec.rounds as i64),
        time,
        text_cell(&rec.time_format),
        text_cell(&rec.referee),
    ];
    corner_cells(f1, &mut row);
    corner_cells(f2, &mut row);
    for (a, b) in f1.charts.iter().zip(&f2.charts) {
        row.push(text_cell(a));
        row.push(text_cell(b));
    }
    row
}

pub fn assemble(records: &[BoutRecord], num_rounds: usize) -> DataSet {
    let mut ds = DataSet::new(BOUT_SCHEMA_VERSION, bout_columns(num_rounds));
    for rec in records {
        ds.push(bout_row(rec));
    }
    ds
}

/// Full bout pipeline.
pub fn collect(
    source: &dyn PageSource,
    site: &SiteConfig,
    opts: &ScrapeOptions,
    events: &[EventLink],
    progress: &mut dyn Progress,
) -> Result<(DataSet, RunReport)> {
    let mut report = RunReport::new("bouts");
    let bouts = discover_bout_links(source, site, opts, events, progress)?;
    info!(bouts = bouts.len(), "bout pages to fetch");

    progress.begin("bout pages", bouts.len());
    let results = run_ordered(
        &bouts,
        pool_config(opts, OnError::Skip),
        progress,
        |b| b.bout_url.clone(),
        |b| extract_bout(source, site, b),
    );
    progress.finish();

    let mut records = Vec::with_capacity(results.len());
    for (i, result) in results {
        match result {
            Ok(rec) => {
                report.record_ok();
                records.push(rec);
            }
            Err(e) => {
                let url = &bouts[i].bout_url;
                warn!(bout = %url, reason = e.kind(), "skipping bout: {e}");
                report.record_skip(url, &e);
            }
        }
    }

    Ok((assemble(&records, site.num_rounds), report))
}

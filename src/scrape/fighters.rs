// src/scrape/fighters.rs
// Fighter pipeline: event pages → distinct profile links → profiles → typed table.

use std::collections::HashSet;

use chrono::{Datelike, Local};
use tracing::{debug, info};

use crate::{
    config::{options::ScrapeOptions, SiteConfig},
    core::{fetch_document, sanitize::is_placeholder, units, PageSource},
    dataset::{Cell, Column, ColumnKind, DataSet},
    error::Result,
    progress::Progress,
    report::RunReport,
    specs::{
        events::{parse_fighter_links, EventLink, FighterLink},
        fighters::{parse_profile, Profile, ProfileField},
    },
};

use super::{all_or_first_error, pool_config, run_ordered, OnError};

/// Bump when the column list below changes.
pub const FIGHTER_SCHEMA_VERSION: u32 = 1;

pub const FIGHTER_COLUMNS: [(&str, ColumnKind); 17] = [
    ("Fullname", ColumnKind::Text),
    ("Win", ColumnKind::Int),
    ("Loss", ColumnKind::Int),
    ("Draw", ColumnKind::Int),
    ("Age", ColumnKind::Int),
    ("Height", ColumnKind::Float),
    ("Weight", ColumnKind::Float),
    ("Reach", ColumnKind::Float),
    ("Stance", ColumnKind::Text),
    ("SLpM", ColumnKind::Float),
    ("Str.Acc.%", ColumnKind::Int),
    ("SApM", ColumnKind::Float),
    ("Str.Def%", ColumnKind::Int),
    ("TDAvg.", ColumnKind::Float),
    ("TDAcc.%", ColumnKind::Int),
    ("TDDef.%", ColumnKind::Int),
    ("Sub.Avg.", ColumnKind::Float),
];

/// One fighter as scraped, before unit conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct FighterRecord {
    pub name: String,
    /// Identity key.
    pub url: String,
    pub profile: Profile,
}

/// Distinct fighter links across `events`, keyed by profile URL, in first-seen order.
/// Returns the links and the number of anchors dropped for lacking an `href`.
pub fn discover_fighter_links(
    source: &dyn PageSource,
    site: &SiteConfig,
    opts: &ScrapeOptions,
    events: &[EventLink],
    progress: &mut dyn Progress,
) -> Result<(Vec<FighterLink>, usize)> {
    progress.begin("event pages (fighters)", events.len());
    let results = run_ordered(
        events,
        pool_config(opts, OnError::Abort),
        progress,
        |ev| ev.url.clone(),
        |ev| {
            let doc = fetch_document(source, &ev.url)?;
            parse_fighter_links(&doc, &site.classes)
        },
    );
    progress.finish();
    let per_event = all_or_first_error(results)?;

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    let mut malformed = 0;
    for found in per_event {
        malformed += found.malformed;
        for link in found.links {
            if seen.insert(link.url.clone()) {
                links.push(link);
            }
        }
    }
    debug!(fighters = links.len(), malformed, "fighter discovery done");
    Ok((links, malformed))
}

pub fn extract_profile(source: &dyn PageSource, site: &SiteConfig, link: &FighterLink) -> Result<FighterRecord> {
    let doc = fetch_document(source, &link.url)?;
    let profile = parse_profile(&doc, &site.classes)?;
    Ok(FighterRecord { name: link.name.clone(), url: link.url.clone(), profile })
}

pub fn fighter_columns() -> Vec<Column> {
    FIGHTER_COLUMNS.iter().map(|(name, kind)| Column::new(*name, *kind)).collect()
}

/// Unit-normalize raw profiles into the published fighter table.
/// `current_year` drives the age column.
pub fn normalize(records: &[FighterRecord], current_year: i32) -> DataSet {
    let mut ds = DataSet::new(FIGHTER_SCHEMA_VERSION, fighter_columns());
    for rec in records {
        ds.push(normalize_one(rec, current_year));
    }
    ds
}

fn normalize_one(rec: &FighterRecord, current_year: i32) -> Vec<Cell> {
    let p = &rec.profile;
    let raw = |f: ProfileField| p.field(f).unwrap_or("");

    let stance = match raw(ProfileField::Stance) {
        s if s.is_empty() || is_placeholder(s) => Cell::Null,
        s => Cell::Text(s!(s)),
    };

    vec![
        Cell::Text(rec.name.clone()),
        Cell::Int(p.tally.wins as i64),
        Cell::Int(p.tally.losses as i64),
        Cell::Int(p.tally.draws as i64),
        units::age_from_dob(raw(ProfileField::Dob), current_year).into(),
        units::height_cm(raw(ProfileField::Height)).into(),
        units::weight_kg(raw(ProfileField::Weight)).into(),
        units::reach_cm(raw(ProfileField::Reach)).into(),
        stance,
        units::rate(raw(ProfileField::SlpM)).into(),
        units::percent(raw(ProfileField::StrAcc)).into(),
        units::rate(raw(ProfileField::SapM)).into(),
        units::percent(raw(ProfileField::StrDef)).into(),
        units::rate(raw(ProfileField::TdAvg)).into(),
        units::percent(raw(ProfileField::TdAcc)).into(),
        units::percent(raw(ProfileField::TdDef)).into(),
        units::rate(raw(ProfileField::SubAvg)).into(),
    ]
}

/// Full fighter pipeline. Any event or profile failure aborts it.
pub fn collect(
    source: &dyn PageSource,
    site: &SiteConfig,
    opts: &ScrapeOptions,
    events: &[EventLink],
    progress: &mut dyn Progress,
) -> Result<(DataSet, RunReport)> {
    let mut report = RunReport::new("fighters");
    let (links, malformed) = discover_fighter_links(source, site, opts, events, progress)?;
    report.malformed_links = malformed;
    info!(fighters = links.len(), "profiles to fetch");

    progress.begin("fighter profiles", links.len());
    let results = run_ordered(
        &links,
        pool_config(opts, OnError::Abort),
        progress,
        |l| l.name.clone(),
        |l| extract_profile(source, site, l),
    );
    progress.finish();
    let records = all_or_first_error(results)?;
    for _ in &records {
        report.record_ok();
    }

    Ok((normalize(&records, Local::now().year()), report))
}

// src/specs/bouts.rs
//! Bout detail page.
//!
//! The header (status, names, nicknames, method, round, time, format, referee) is
//! read by class. The statistics are read by position: the page renders every
//! `tr.b-fight-details__table-row` of four tables into one flat sequence, and
//! the number of per-round rows depends on how many rounds were fought (`R`).
//!
//! ```text
//! row 0            totals header
//! row 1            totals body                      totals_row()
//! row 2            per-round totals header
//! rows 3..=R+2     round r at r + 2                 round_row(r)
//! row R+3          significant strikes header
//! row R+4          significant strikes body         sig_totals_row(R)
//! row R+5          per-round sig. strikes header
//! rows R+6..=2R+5  round r at R + r + 5             sig_round_row(R, r)
//! ```
//!
//! Inside a row, each column holds one `<p class="b-fight-details__table-text">`
//! per fighter, so cell `base + side` (side 0 or 1) picks the fighter.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::SENTINEL;
use crate::config::site::{Classes, SiteConfig};
use crate::core::html::{class_selector, clean_text, nth, parse_selector, raw_text};
use crate::core::sanitize::{first_token, strip_label, strip_quotes};
use crate::error::{Result, ScrapeError};

/// Totals-table stats and the cell index of fighter 1's value.
pub const TOTAL_STATS: [(&str, usize); 9] = [
    ("kd", 2),
    ("sig_str", 4),
    ("sig_str%", 6),
    ("total_str", 8),
    ("td", 10),
    ("td%", 12),
    ("sub.att", 14),
    ("rev", 16),
    ("ctrl", 18),
];

/// Significant-strike target areas and the cell index of fighter 1's value.
pub const SIG_AREAS: [(&str, usize); 6] = [
    ("head", 6),
    ("body", 8),
    ("leg", 10),
    ("dist", 12),
    ("clinch", 14),
    ("ground", 16),
];

/// Landed-by-target charts, in page order.
pub const CHART_AREAS: [&str; 6] = ["head", "body", "leg", "dist", "clinch", "ground"];

pub fn totals_row() -> usize { 1 }
pub fn round_row(round: usize) -> usize { round + 2 }
pub fn sig_totals_row(rounds: usize) -> usize { rounds + 4 }
pub fn sig_round_row(rounds: usize, round: usize) -> usize { rounds + round + 5 }

/// Which of the two participants (0 = red corner, listed first).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub fn offset(self) -> usize {
        match self { Side::First => 0, Side::Second => 1 }
    }
}

/// Where a bout was listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoutRef {
    pub date: String,
    pub event_url: String,
    pub bout_url: String,
}

/// One fighter's side of a bout. Per-round vectors always hold `num_rounds`
/// entries; rounds that were not fought are filled with the sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corner {
    pub status: String,
    pub name: String,
    pub nickname: String,
    /// Aligned with `TOTAL_STATS`.
    pub totals: Vec<String>,
    /// `rounds[r - 1]` aligned with `TOTAL_STATS`.
    pub rounds: Vec<Vec<String>>,
    /// Aligned with `SIG_AREAS`.
    pub sig_totals: Vec<String>,
    /// `sig_rounds[r - 1]` aligned with `SIG_AREAS`.
    pub sig_rounds: Vec<Vec<String>>,
    /// Aligned with `CHART_AREAS`.
    pub charts: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoutRecord {
    pub source: BoutRef,
    pub method: String,
    /// Rounds actually fought, `1..=num_rounds`.
    pub rounds: usize,
    pub time: String,
    pub time_format: String,
    pub referee: String,
    pub corners: [Corner; 2],
}

struct Selectors {
    person: Selector,
    person_link: Selector,
    person_title: Selector,
    method: Selector,
    text_item: Selector,
    table_row: Selector,
    table_text: Selector,
    charts_row: Selector,
}

impl Selectors {
    fn new(c: &Classes) -> Result<Self> {
        Ok(Self {
            person: class_selector("div", c.person)?,
            person_link: class_selector("a", c.person_link)?,
            person_title: class_selector("p", c.person_title)?,
            method: parse_selector(&format!(r#"i[style="{}"]"#, c.method_style))?,
            text_item: class_selector("i", c.text_item)?,
            table_row: class_selector("tr", c.table_row)?,
            table_text: class_selector("p", c.table_text)?,
            charts_row: class_selector("div", c.charts_row)?,
        })
    }
}

/// Extract a whole bout or fail; a partial record is never returned.
pub fn parse_bout(doc: &Html, site: &SiteConfig, source: BoutRef) -> Result<BoutRecord> {
    let sel = Selectors::new(&site.classes)?;

    let method = clean_text(nth(doc.select(&sel.method), 0, "win method")?);

    let items: Vec<ElementRef> = doc.select(&sel.text_item).collect();
    let item = |n: usize, label: &str| -> Result<String> {
        let el = items
            .get(n)
            .ok_or_else(|| ScrapeError::missing(format!("{label} field")))?;
        Ok(strip_label(&raw_text(*el), label))
    };
    let round_text = item(0, "Round:")?;
    let time = item(1, "Time:")?;
    let time_format = item(2, "Time format:")?;
    let referee = item(3, "Referee:")?;

    let rounds: usize = round_text
        .parse()
        .map_err(|_| ScrapeError::bad_value("round", round_text.as_str()))?;
    if rounds == 0 || rounds > site.num_rounds {
        return Err(ScrapeError::RoundsOutOfRange { rounds, max: site.num_rounds });
    }

    let rows: Vec<ElementRef> = doc.select(&sel.table_row).collect();
    let charts = read_charts(doc, &sel)?;

    let [first, second] = Side::BOTH.map(|side| read_corner(doc, &sel, &rows, &charts, side, rounds, site.num_rounds));

    Ok(BoutRecord {
        source,
        method,
        rounds,
        time,
        time_format,
        referee,
        corners: [first?, second?],
    })
}

fn read_corner(
    doc: &Html,
    sel: &Selectors,
    rows: &[ElementRef],
    charts: &[[String; 2]],
    side: Side,
    rounds: usize,
    num_rounds: usize,
) -> Result<Corner> {
    let i = side.offset();

    let person = nth(doc.select(&sel.person), i, "fighter block")?;
    let status = first_token(&raw_text(person));
    let name = clean_text(nth(doc.select(&sel.person_link), i, "fighter name")?);
    let nickname = strip_quotes(&clean_text(nth(doc.select(&sel.person_title), i, "fighter nickname")?));

    let cell = |row: usize, base: usize| stat_cell(rows, &sel.table_text, row, base, side);

    let totals = TOTAL_STATS
        .iter()
        .map(|(_, base)| cell(totals_row(), *base))
        .collect::<Result<Vec<_>>>()?;

    let mut per_round = Vec::with_capacity(num_rounds);
    for r in 1..=num_rounds {
        per_round.push(if r <= rounds {
            TOTAL_STATS
                .iter()
                .map(|(_, base)| cell(round_row(r), *base))
                .collect::<Result<Vec<_>>>()?
        } else {
            vec![s!(SENTINEL); TOTAL_STATS.len()]
        });
    }

    let sig_totals = SIG_AREAS
        .iter()
        .map(|(_, base)| cell(sig_totals_row(rounds), *base))
        .collect::<Result<Vec<_>>>()?;

    let mut sig_rounds = Vec::with_capacity(num_rounds);
    for r in 1..=num_rounds {
        sig_rounds.push(if r <= rounds {
            SIG_AREAS
                .iter()
                .map(|(_, base)| cell(sig_round_row(rounds, r), *base))
                .collect::<Result<Vec<_>>>()?
        } else {
            vec![s!(SENTINEL); SIG_AREAS.len()]
        });
    }

    Ok(Corner {
        status,
        name,
        nickname,
        totals,
        rounds: per_round,
        sig_totals,
        sig_rounds,
        charts: charts.iter().map(|pair| pair[i].clone()).collect(),
    })
}

/// Text of stat cell `base + side` in flat row `row`.
fn stat_cell(rows: &[ElementRef], text_sel: &Selector, row: usize, base: usize, side: Side) -> Result<String> {
    let tr = rows
        .get(row)
        .ok_or_else(|| ScrapeError::missing(format!("stats row {row}")))?;
    let p = nth(tr.select(text_sel), base + side.offset(), &format!("stats row {row} cell"))?;
    Ok(clean_text(p))
}

/// Each chart row reads like `11 Head 45`: fighter 1 is token 0, fighter 2 token 2.
fn read_charts(doc: &Html, sel: &Selectors) -> Result<Vec<[String; 2]>> {
    let rows: Vec<ElementRef> = doc.select(&sel.charts_row).collect();
    CHART_AREAS
        .iter()
        .enumerate()
        .map(|(k, area)| {
            let row = rows
                .get(k)
                .ok_or_else(|| ScrapeError::missing(format!("{area} chart")))?;
            let text = raw_text(*row);
            let tokens: Vec<&str> = text.split_whitespace().collect();
            match (tokens.first(), tokens.get(2)) {
                (Some(a), Some(b)) => Ok([s!(*a), s!(*b)]),
                _ => Err(ScrapeError::bad_value("target-area chart", text.trim())),
            }
        })
        .collect()
}

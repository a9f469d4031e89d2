// src/specs/fighters.rs
// Fighter detail page: `label: value` bio/career list plus the bout-history flags.

use scraper::Html;

use crate::config::consts::UPCOMING_FLAG;
use crate::config::site::Classes;
use crate::core::html::{class_selector, clean_text, raw_text};
use crate::core::sanitize::split_label_value;
use crate::error::Result;

/// Profile fields the fighter schema reads, keyed by their label on the page
/// (whitespace removed). Anything else on the page is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Height,
    Weight,
    Reach,
    Stance,
    Dob,
    SlpM,
    StrAcc,
    SapM,
    StrDef,
    TdAvg,
    TdAcc,
    TdDef,
    SubAvg,
}

impl ProfileField {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Height => "Height",
            ProfileField::Weight => "Weight",
            ProfileField::Reach => "Reach",
            ProfileField::Stance => "STANCE",
            ProfileField::Dob => "DOB",
            ProfileField::SlpM => "SLpM",
            ProfileField::StrAcc => "Str.Acc.",
            ProfileField::SapM => "SApM",
            ProfileField::StrDef => "Str.Def",
            ProfileField::TdAvg => "TDAvg.",
            ProfileField::TdAcc => "TDAcc.",
            ProfileField::TdDef => "TDDef.",
            ProfileField::SubAvg => "Sub.Avg.",
        }
    }
}

/// Outcome tally over the bout-history flags. Upcoming bouts are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// `nc` and any other non-upcoming flag.
    pub other: u32,
}

impl Tally {
    pub fn add(&mut self, flag: &str) {
        match flag.trim().to_ascii_lowercase().as_str() {
            "win" => self.wins += 1,
            "loss" => self.losses += 1,
            "draw" => self.draws += 1,
            f if f == UPCOMING_FLAG => {}
            _ => self.other += 1,
        }
    }

    /// Flags that belong to bouts already fought.
    pub fn fought(&self) -> u32 {
        self.wins + self.losses + self.draws + self.other
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    /// `(compact label, value)` in page order.
    pub fields: Vec<(String, String)>,
    pub tally: Tally,
}

impl Profile {
    /// Raw value for a schema field, matched case-insensitively on the compact label.
    pub fn field(&self, f: ProfileField) -> Option<&str> {
        let want = f.label();
        self.fields
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(want))
            .map(|(_, v)| v.as_str())
    }
}

pub fn parse_profile(doc: &Html, classes: &Classes) -> Result<Profile> {
    let item_sel = class_selector("li", classes.profile_item)?;
    let flag_sel = class_selector("i", classes.flag)?;

    let fields = doc
        .select(&item_sel)
        .filter_map(|li| split_label_value(&raw_text(li)))
        .filter(|(label, _)| !label.is_empty())
        .collect();

    let mut tally = Tally::default();
    for flag in doc.select(&flag_sel) {
        tally.add(&clean_text(flag));
    }

    Ok(Profile { fields, tally })
}

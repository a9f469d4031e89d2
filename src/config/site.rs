// src/config/site.rs
//! Immutable description of the remote site: where to start, how to ask,
//! and which markup classes carry which fields.
//!
//! Built once (usually `SiteConfig::default()` plus CLI overrides) and handed
//! by reference to the fetcher and to every extractor.

use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub listing_url: String,
    pub headers: Vec<(String, String)>,
    /// `None` leaves the client default in place.
    pub timeout: Option<Duration>,
    pub classes: Classes,
    /// Fixed number of per-round column groups in a bout row.
    pub num_rounds: usize,
}

/// Class lists used to locate fields. Each value is the literal `class`
/// attribute content; selectors are built by `core::html::class_selector`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classes {
    pub event_row: &'static str,
    pub fighter_link: &'static str,
    pub bout_row: &'static str,
    pub profile_item: &'static str,
    pub flag: &'static str,
    pub person: &'static str,
    pub person_link: &'static str,
    pub person_title: &'static str,
    pub text_item: &'static str,
    pub table_row: &'static str,
    pub table_text: &'static str,
    pub charts_row: &'static str,
    pub method_style: &'static str,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            event_row: CLS_EVENT_ROW,
            fighter_link: CLS_FIGHTER_LINK,
            bout_row: CLS_BOUT_ROW,
            profile_item: CLS_PROFILE_ITEM,
            flag: CLS_FLAG,
            person: CLS_PERSON,
            person_link: CLS_PERSON_LINK,
            person_title: CLS_PERSON_TITLE,
            text_item: CLS_TEXT_ITEM,
            table_row: CLS_TABLE_ROW,
            table_text: CLS_TABLE_TEXT,
            charts_row: CLS_CHARTS_ROW,
            method_style: METHOD_STYLE,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listing_url: s!(LISTING_URL),
            headers: HEADERS
                .iter()
                .map(|(k, v)| (s!(*k), s!(*v)))
                .collect(),
            timeout: None,
            classes: Classes::default(),
            num_rounds: NUM_ROUNDS,
        }
    }
}

impl SiteConfig {
    pub fn with_listing_url(mut self, url: impl Into<String>) -> Self {
        self.listing_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "http://ufcstats.com/statistics/events/completed?page=all";

pub const HEADERS: [(&str, &str); 6] = [
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,\
         image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9",
    ),
    ("Accept-Encoding", "gzip, deflate"),
    ("Accept-Language", "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7"),
    ("Cache-Control", "max-age=0"),
    ("Connection", "keep-alive"),
    (
        "User-Agent",
        "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/107.0.0.0 Mobile Safari/537.36",
    ),
];

// Markup classes (space-separated lists, as they appear in the site's `class` attribute)
pub const CLS_EVENT_ROW: &str = "b-statistics__table-content";
pub const CLS_FIGHTER_LINK: &str = "b-link b-link_style_black";
pub const CLS_BOUT_ROW: &str =
    "b-fight-details__table-row b-fight-details__table-row__hover js-fight-details-click";
pub const CLS_PROFILE_ITEM: &str = "b-list__box-list-item b-list__box-list-item_type_block";
pub const CLS_FLAG: &str = "b-flag__text";
pub const CLS_PERSON: &str = "b-fight-details__person";
pub const CLS_PERSON_LINK: &str = "b-link b-fight-details__person-link";
pub const CLS_PERSON_TITLE: &str = "b-fight-details__person-title";
pub const CLS_TEXT_ITEM: &str = "b-fight-details__text-item";
pub const CLS_TABLE_ROW: &str = "b-fight-details__table-row";
pub const CLS_TABLE_TEXT: &str = "b-fight-details__table-text";
pub const CLS_CHARTS_ROW: &str = "b-fight-details__charts-row";
pub const METHOD_STYLE: &str = "font-style: normal";

// Bout shape
pub const NUM_ROUNDS: usize = 5;
pub const SENTINEL: &str = "---";
pub const PLACEHOLDER: &str = "--";
pub const UPCOMING_FLAG: &str = "next";

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const FIGHTERS_FILE: &str = "fighters";
pub const BOUTS_FILE: &str = "bouts";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

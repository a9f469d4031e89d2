// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction for ufcstats.com. Each spec covers one kind of page
//! and encodes *where the ground truth lives in the markup* and *how to read it*.
//!
//! ## What lives here
//! - **Pure parsing** over an already-parsed `scraper::Html`. No fetching.
//! - **Selector choice**: every selector is built from `SiteConfig::classes`, so
//!   the class lists live in one place.
//! - **Positional accessors** for the bout statistics tables, one function per
//!   structural assumption (see `bouts`).
//! - **Typed results**: small record structs, or a `ScrapeError` naming the node
//!   that was expected and not found.
//!
//! ## What does **not** live here
//! - Fetching, worker pools, progress, run reports: `scrape`.
//! - Unit conversion and dataset shaping: `core::units`, `scrape::fighters`,
//!   `scrape::bouts`.
//! - Export: `csv` / `file`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::{fighters,bouts}::collect → core::fetch_document
//!                                         ↘ specs::<page>::parse_*
//!                                         ↘ DataSet → file::export_dataset
//! ```
//!
//! ## Testing notes
//! Every parser is tested offline against small inline documents shaped like
//! the live pages; the full fixtures live under `tests/fixtures/`.
pub mod bouts;
pub mod events;
pub mod fighters;

// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;
pub mod units;

pub use net::{fetch_document, HttpFetcher, MemorySource, PageSource};

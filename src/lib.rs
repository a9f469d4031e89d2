// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod dataset;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod specs;

pub use error::{Result, ScrapeError};

// src/report.rs
// Per-pipeline run accounting: what was tried, what made it into the table,
// and why the rest did not.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skip {
    pub url: String,
    /// `ScrapeError::kind()` of the failure.
    pub reason: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub pipeline: &'static str,
    pub attempted: usize,
    pub succeeded: usize,
    pub skipped: Vec<Skip>,
    /// Discovery entries dropped before extraction (anchors without a link).
    pub malformed_links: usize,
}

impl RunReport {
    pub fn new(pipeline: &'static str) -> Self {
        Self {
            pipeline,
            attempted: 0,
            succeeded: 0,
            skipped: Vec::new(),
            malformed_links: 0,
        }
    }

    pub fn record_ok(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub fn record_skip(&mut self, url: &str, err: &ScrapeError) {
        self.attempted += 1;
        self.skipped.push(Skip {
            url: s!(url),
            reason: err.kind(),
            message: err.to_string(),
        });
    }

    /// Skip counts per reason, in stable (alphabetical) order.
    pub fn by_reason(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        for s in &self.skipped {
            *out.entry(s.reason).or_insert(0) += 1;
        }
        out
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} attempted, {} succeeded, {} skipped",
            self.pipeline,
            self.attempted,
            self.succeeded,
            self.skipped.len()
        )?;
        if self.malformed_links > 0 {
            write!(f, ", {} malformed links dropped", self.malformed_links)?;
        }
        for (reason, n) in self.by_reason() {
            write!(f, "\n  {reason}: {n}")?;
        }
        Ok(())
    }
}

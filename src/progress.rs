// src/progress.rs
/// Lightweight progress reporting used by long-running operations (crawls, export).
/// Frontends implement this to surface status to users. Always driven from the
/// calling thread, never from workers.
pub trait Progress {
    /// Called at the start of a stage with the number of items in it.
    fn begin(&mut self, _stage: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item (event page, profile, bout) completed.
    fn item_done(&mut self, _label: &str) {}

    /// One item failed; whether that is fatal is the caller's business.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end of a stage, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

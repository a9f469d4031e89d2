// src/scrape/pool.rs
// Bounded, order-preserving worker pool for detail-page fetches.
//
// Workers pull the next index from a shared cursor and send `(index, result)`
// back over a channel. The calling thread drains the channel (driving progress)
// and re-sorts by index, so output order is input order whatever finished first.

use std::{
    thread,
    time::Duration,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
};

use tracing::trace;

use crate::config::consts::JITTER_MS;
use crate::error::Result;
use crate::progress::Progress;

/// What a failed item does to the rest of the batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    /// Stop handing out new items; in-flight ones still report.
    Abort,
    /// Keep going.
    Skip,
}

#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    pub workers: usize,
    pub pause_ms: u64,
    pub on_error: OnError,
}

/// Run `work` over `items` and return every result that was produced, sorted by
/// input index. Under `OnError::Abort` the tail may be missing; callers look for
/// the first `Err`.
pub fn run_ordered<T, R, F, L>(
    items: &[T],
    cfg: PoolConfig,
    progress: &mut dyn Progress,
    label: L,
    work: F,
) -> Vec<(usize, Result<R>)>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R> + Sync,
    L: Fn(&T) -> String,
{
    if items.is_empty() {
        return Vec::new();
    }

    let cursor = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<R>)>();
    let workers = cfg.workers.min(items.len()).max(1);

    let mut out = Vec::with_capacity(items.len());

    thread::scope(|scope| {
        for w in 0..workers {
            let tx = res_tx.clone();
            let (cursor, stop, work) = (&cursor, &stop, &work);

            scope.spawn(move || loop {
                if stop.load(Ordering::Relaxed) {
                    break;
                }
                let i = cursor.fetch_add(1, Ordering::Relaxed);
                if i >= items.len() {
                    break;
                }
                trace!(worker = w, item = i, "pick");

                let result = work(&items[i]);
                if result.is_err() && cfg.on_error == OnError::Abort {
                    stop.store(true, Ordering::Relaxed);
                }
                if tx.send((i, result)).is_err() {
                    break;
                }
                pause(cfg.pause_ms, i);
            });
        }
        drop(res_tx); // calling thread is sole receiver now

        for (i, result) in res_rx {
            let name = label(&items[i]);
            match &result {
                Ok(_) => progress.item_done(&name),
                Err(_) => progress.item_failed(&name),
            }
            out.push((i, result));
        }
    });

    out.sort_by_key(|(i, _)| *i);
    out
}

/// Per-request politeness delay. Zero disables it, jitter included.
fn pause(pause_ms: u64, i: usize) {
    if pause_ms == 0 {
        return;
    }
    let jitter = (i as u64 * 7) % JITTER_MS;
    thread::sleep(Duration::from_millis(pause_ms + jitter));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use crate::progress::NullProgress;

    fn cfg(workers: usize, on_error: OnError) -> PoolConfig {
        PoolConfig { workers, pause_ms: 0, on_error }
    }

    #[test]
    fn output_follows_input_order() {
        let items: Vec<u64> = (0..40).collect();
        let out = run_ordered(&items, cfg(6, OnError::Skip), &mut NullProgress, |n| n.to_string(), |n| {
            // later items finish first
            thread::sleep(Duration::from_micros(400 - n * 10));
            Ok(n * 2)
        });
        let values: Vec<u64> = out.into_iter().map(|(_, r)| r.unwrap()).collect();
        assert_eq!(values, items.iter().map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn skip_keeps_every_result() {
        let items = [1, 2, 3, 4];
        let out = run_ordered(&items, cfg(2, OnError::Skip), &mut NullProgress, |n| n.to_string(), |n| {
            if n % 2 == 0 { Err(ScrapeError::missing("even")) } else { Ok(*n) }
        });
        assert_eq!(out.len(), 4);
        assert!(out[0].1.is_ok());
        assert!(out[1].1.is_err());
        assert!(out[3].1.is_err());
    }

    #[test]
    fn abort_stops_handing_out_work() {
        let items: Vec<usize> = (0..50).collect();
        let out = run_ordered(&items, cfg(1, OnError::Abort), &mut NullProgress, |n| n.to_string(), |n| {
            if *n == 3 { Err(ScrapeError::missing("three")) } else { Ok(*n) }
        });
        // one worker: 0, 1, 2 succeed, 3 fails, nothing after
        assert_eq!(out.len(), 4);
        assert!(out[3].1.is_err());
    }

    #[derive(Default)]
    struct Counts { done: usize, failed: usize }
    impl Progress for Counts {
        fn item_done(&mut self, _: &str) { self.done += 1; }
        fn item_failed(&mut self, _: &str) { self.failed += 1; }
    }

    #[test]
    fn progress_sees_each_item_once() {
        let items = ["a", "b", "c"];
        let mut counts = Counts::default();
        run_ordered(&items, cfg(3, OnError::Skip), &mut counts, |s| s.to_string(), |s| {
            if *s == "b" { Err(ScrapeError::missing("b")) } else { Ok(()) }
        });
        assert_eq!((counts.done, counts.failed), (2, 1));
    }

    #[test]
    fn empty_input_spawns_nothing() {
        let items: [u8; 0] = [];
        let out = run_ordered(&items, cfg(4, OnError::Abort), &mut NullProgress, |_| s!(), |_| Ok(()));
        assert!(out.is_empty());
    }
}

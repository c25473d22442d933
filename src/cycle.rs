// src/cycle.rs
//
// Generation bookkeeping for ingestion cycles. Fetches are never
// cancelled; overlapping cycles may finish out of request order. Each
// started cycle gets a fresh generation and only the latest one's
// outcome may be applied, so a slow fetch can't overwrite newer data.

use crate::error::FeedError;
use crate::feed::FeedData;

#[derive(Debug, Default)]
pub struct CycleTracker {
    latest: u64,
}

impl CycleTracker {
    /// Start a cycle, returning its generation.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Is this generation still the latest one issued?
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

/// What a finished fetch worker deposits for the GUI thread to drain.
#[derive(Debug)]
pub struct CycleOutcome {
    pub generation: u64,
    pub result: Result<FeedData, FeedError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_generation_is_current() {
        let mut tracker = CycleTracker::default();
        let g1 = tracker.begin();
        assert!(tracker.is_current(g1));

        let g2 = tracker.begin();
        assert!(!tracker.is_current(g1));
        assert!(tracker.is_current(g2));
    }
}

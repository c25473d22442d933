// src/feed/mod.rs
//
// One ingestion cycle's worth of derived data: raw CSV text in,
// grouped brackets plus ranked standings out. Both derivations read
// the same raw table independently; the standings are not built from
// the grouped output.

pub mod brackets;
pub mod leaderboard;

pub use brackets::{Brackets, MatchGroup, TeamEntry, group_matches};
pub use leaderboard::{LeaderboardEntry, standings};

use crate::core::{csv, net};
use crate::error::FeedError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedData {
    pub brackets: Brackets,
    pub standings: Vec<LeaderboardEntry>,
}

pub fn ingest(text: &str) -> FeedData {
    let rows = csv::parse_rows(text);
    FeedData {
        brackets: group_matches(&rows),
        standings: standings(&rows),
    }
}

/// Fetch and ingest. A blank URL is "nothing configured yet": no
/// network round trip, empty feed, placeholders downstream.
pub fn fetch(url: &str) -> Result<FeedData, FeedError> {
    let url = url.trim();
    if url.is_empty() {
        logd!("Feed: no URL configured, serving empty feed");
        return Ok(FeedData::default());
    }
    let text = net::fetch_text(url)?;
    Ok(ingest(&text))
}

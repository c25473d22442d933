// src/view/mod.rs
//
// The materialized view: three round containers of match cards plus
// the leaderboard, all owned here and updated only through apply().
// Nobody re-derives state by inspecting rendered output; the
// snapshots *are* the previous state.

pub mod reconcile;

use crate::feed::{FeedData, LeaderboardEntry, MatchGroup, TeamEntry};
use reconcile::{Snapshot, SyncStats};

/// Reserved key for the "no data" node, so the placeholder rides the
/// normal keyed diff: created once per empty container, untouched by
/// repeated empty cycles, removed as soon as real items show up.
pub const EMPTY_KEY: &str = "__empty__";

#[derive(Clone, Debug, Default)]
pub struct TeamRow {
    pub name: String,
    pub score: String,
}

#[derive(Clone, Debug, Default)]
pub struct MatchCard {
    pub title: String,
    /// Keyed by row position, not team name. A reorder inside an
    /// unchanged bracket rewrites text in place rather than moving
    /// nodes. Kept from the original behavior.
    pub teams: Snapshot<TeamRow>,
}

#[derive(Clone, Debug, Default)]
pub struct LeaderboardRow {
    pub rank: String,
    pub team: String,
    pub points: String,
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub rounds: [Snapshot<MatchCard>; 3],
    pub leaderboard: Snapshot<LeaderboardRow>,
}

impl ViewState {
    /// Reconcile every container against freshly derived data.
    /// Idempotent: applying the same data twice reports a no-op.
    pub fn apply(&mut self, data: &FeedData) -> SyncStats {
        let mut total = SyncStats::default();
        for (i, snap) in self.rounds.iter_mut().enumerate() {
            total.merge(sync_round(snap, &data.brackets.rounds[i]));
        }
        total.merge(sync_leaderboard(&mut self.leaderboard, &data.standings));
        total
    }
}

fn sync_round(snap: &mut Snapshot<MatchCard>, groups: &[MatchGroup]) -> SyncStats {
    let placeholder;
    let (list, synthetic) = if groups.is_empty() {
        placeholder = [MatchGroup {
            title: s!("No data"),
            teams: vec![TeamEntry {
                team: s!("—"),
                score: s!("-"),
            }],
        }];
        (&placeholder[..], true)
    } else {
        (groups, false)
    };

    let mut nested = SyncStats::default();
    let mut stats = snap.sync(
        list,
        |_, g| if synthetic { s!(EMPTY_KEY) } else { g.title.clone() },
        |card, _, g| {
            let mut changed = set_text(&mut card.title, &g.title);
            let team_stats = card.teams.sync(
                &g.teams,
                |i, _| i.to_string(),
                |row, _, t| {
                    let mut ch = set_text(&mut row.name, or_dash(&t.team));
                    ch |= set_text(&mut row.score, or_dash(&t.score));
                    ch
                },
            );
            changed |= !team_stats.is_noop();
            nested.merge(team_stats);
            changed
        },
    );
    stats.merge(nested);
    stats
}

fn sync_leaderboard(snap: &mut Snapshot<LeaderboardRow>, items: &[LeaderboardEntry]) -> SyncStats {
    if items.is_empty() {
        return snap.sync(
            &[()],
            |_, _| s!(EMPTY_KEY),
            |row, _, _| {
                let mut ch = set_text(&mut row.rank, "");
                ch |= set_text(&mut row.team, "No leaderboard data");
                ch |= set_text(&mut row.points, "");
                ch
            },
        );
    }
    snap.sync(
        items,
        |_, e| e.team.clone(),
        |row, i, e| {
            let mut ch = set_text(&mut row.rank, &rank_label(i));
            ch |= set_text(&mut row.team, &e.team);
            let pts = format!("{} points", crate::feed::leaderboard::fmt_points(e.points));
            ch |= set_text(&mut row.points, &pts);
            ch
        },
    )
}

/// Medals for the podium, "N." below it.
pub fn rank_label(position: usize) -> String {
    match position {
        0 => s!("🥇"),
        1 => s!("🥈"),
        2 => s!("🥉"),
        n => format!("{}.", n + 1),
    }
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

/// Assign only on change, and say whether anything changed.
fn set_text(slot: &mut String, text: &str) -> bool {
    if slot == text {
        false
    } else {
        slot.clear();
        slot.push_str(text);
        true
    }
}

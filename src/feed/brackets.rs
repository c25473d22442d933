// src/feed/brackets.rs
//
// Flat rows → per-round match groups. Rows outside rounds 1-3 are
// skipped without comment; a blank bracket cell groups under the
// literal title "Match". Team order inside a group is source row
// order; group order within a round is natural title order.

use crate::core::columns::{self, ColumnIndex};
use crate::core::natsort::natural_cmp;
use crate::core::num::leading_int;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamEntry {
    pub team: String,
    /// Display text, untouched beyond trimming. Numeric parsing is the
    /// leaderboard's business.
    pub score: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchGroup {
    pub title: String,
    pub teams: Vec<TeamEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Brackets {
    /// Index 0 is round 1.
    pub rounds: [Vec<MatchGroup>; 3],
}

impl Brackets {
    pub fn round(&self, n: usize) -> &[MatchGroup] {
        &self.rounds[n - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.iter().all(Vec::is_empty)
    }
}

pub fn group_matches(rows: &[Vec<String>]) -> Brackets {
    let mut out = Brackets::default();
    let Some((header, data)) = rows.split_first() else {
        return out;
    };
    let cols = columns::resolve(header);

    for row in data {
        let Some(rd) = round_of(row, &cols) else {
            continue;
        };
        let title = match columns::cell(row, cols.bracket).trim() {
            "" => "Match",
            t => t,
        };
        let entry = TeamEntry {
            team: s!(columns::cell(row, cols.team).trim()),
            score: s!(columns::cell(row, cols.score).trim()),
        };

        let groups = &mut out.rounds[rd - 1];
        match groups.iter_mut().find(|g| g.title == title) {
            Some(g) => g.teams.push(entry),
            None => groups.push(MatchGroup {
                title: s!(title),
                teams: vec![entry],
            }),
        }
    }

    for groups in &mut out.rounds {
        groups.sort_by(|a, b| natural_cmp(&a.title, &b.title));
    }
    out
}

fn round_of(row: &[String], cols: &ColumnIndex) -> Option<usize> {
    match leading_int(columns::cell(row, cols.round)) {
        Some(rd @ 1..=3) => Some(rd as usize),
        _ => None,
    }
}

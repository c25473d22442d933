// src/feed/leaderboard.rs
//
// Global standings: every row's score counts toward its team's total,
// across all rounds and brackets. Blank team names are skipped,
// unparseable scores count as zero. Ranking is points descending with
// a stable sort, so tied teams keep first-appearance order.

use crate::core::columns;
use crate::core::num::leading_float;

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub team: String,
    pub points: f64,
}

pub fn standings(rows: &[Vec<String>]) -> Vec<LeaderboardEntry> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let cols = columns::resolve(header);

    // Vec keeps first-appearance order; team counts are small enough
    // that the linear lookup doesn't matter.
    let mut totals: Vec<LeaderboardEntry> = Vec::new();
    for row in data {
        let team = columns::cell(row, cols.team).trim();
        if team.is_empty() {
            continue;
        }
        let score = leading_float(columns::cell(row, cols.score)).unwrap_or(0.0);
        match totals.iter_mut().find(|e| e.team == team) {
            Some(e) => e.points += score,
            None => totals.push(LeaderboardEntry {
                team: s!(team),
                points: score,
            }),
        }
    }

    totals.sort_by(|a, b| b.points.total_cmp(&a.points));
    totals
}

/// Render standings back into a table, header first. This is the
/// "computed sheet" the CLI exports.
pub fn standings_rows(entries: &[LeaderboardEntry]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![s!("Team"), s!("Points")]];
    for e in entries {
        rows.push(vec![e.team.clone(), fmt_points(e.points)]);
    }
    rows
}

/// Whole totals print without the trailing ".0".
pub fn fmt_points(points: f64) -> String {
    if points.fract() == 0.0 && points.abs() < 1e15 {
        format!("{}", points as i64)
    } else {
        format!("{}", points)
    }
}

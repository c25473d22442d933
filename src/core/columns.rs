// src/core/columns.rs
//
// Header → semantic column mapping. One needle list per column; a
// column resolves to the leftmost header cell containing any of its
// needles, ASCII case-insensitive. No match leaves the column
// unresolved and every consumer reads it as an empty cell.

pub const ROUND_NEEDLES: &[&str] = &["round"];
pub const BRACKET_NEEDLES: &[&str] = &["bracket", "match", "semifinal", "final"];
pub const TEAM_NEEDLES: &[&str] = &["team"];
pub const SCORE_NEEDLES: &[&str] = &["score", "point"];

/// Resolved column positions for one table. Computed once from the
/// header row, immutable afterward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    pub round: Option<usize>,
    pub bracket: Option<usize>,
    pub team: Option<usize>,
    pub score: Option<usize>,
}

pub fn resolve(header: &[String]) -> ColumnIndex {
    ColumnIndex {
        round: find(header, ROUND_NEEDLES),
        bracket: find(header, BRACKET_NEEDLES),
        team: find(header, TEAM_NEEDLES),
        score: find(header, SCORE_NEEDLES),
    }
}

fn find(header: &[String], needles: &[&str]) -> Option<usize> {
    header.iter().position(|cell| {
        let lc = cell.to_ascii_lowercase();
        needles.iter().any(|n| lc.contains(n))
    })
}

/// Cell accessor: unresolved column or short row reads as "".
pub fn cell<'a>(row: &'a [String], index: Option<usize>) -> &'a str {
    match index {
        Some(i) => row.get(i).map(String::as_str).unwrap_or(""),
        None => "",
    }
}

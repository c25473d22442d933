// tests/grouping.rs

use bracket_board::core::csv::parse_rows;
use bracket_board::feed::group_matches;

fn groups_of(text: &str) -> bracket_board::feed::Brackets {
    group_matches(&parse_rows(text))
}

#[test]
fn rows_group_by_round_and_title() {
    let b = groups_of(
        "Round,Bracket,Team,Score\n\
         1,Match 1,Alpha,3\n\
         1,Match 1,Beta,1\n\
         2,Semifinal 1,Alpha,2\n",
    );
    let r1 = b.round(1);
    assert_eq!(r1.len(), 1);
    assert_eq!(r1[0].title, "Match 1");
    assert_eq!(r1[0].teams.len(), 2);
    assert_eq!(r1[0].teams[0].team, "Alpha");
    assert_eq!(r1[0].teams[0].score, "3");
    assert_eq!(r1[0].teams[1].team, "Beta");

    assert_eq!(b.round(2)[0].title, "Semifinal 1");
    assert!(b.round(3).is_empty());
}

#[test]
fn out_of_range_rounds_are_skipped() {
    let b = groups_of(
        "Round,Bracket,Team,Score\n\
         4,Match 1,Alpha,3\n\
         x,Match 1,Beta,1\n\
         0,Match 1,Gamma,2\n",
    );
    assert!(b.is_empty());
}

#[test]
fn blank_bracket_defaults_to_match() {
    let b = groups_of("Round,Bracket,Team,Score\n1,,Alpha,3\n1, ,Beta,1\n");
    assert_eq!(b.round(1).len(), 1);
    assert_eq!(b.round(1)[0].title, "Match");
    assert_eq!(b.round(1)[0].teams.len(), 2);
}

#[test]
fn titles_sort_naturally_within_a_round() {
    let b = groups_of(
        "Round,Bracket,Team,Score\n\
         1,Match 10,A,0\n\
         1,Match 2,B,0\n\
         1,match 1,C,0\n",
    );
    let titles: Vec<&str> = b.round(1).iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["match 1", "Match 2", "Match 10"]);
}

#[test]
fn header_synonyms_and_order_do_not_matter() {
    let b = groups_of("Team,Points,Semifinal,Round\nAlpha,3,Final,1\n");
    assert_eq!(b.round(1)[0].title, "Final");
    assert_eq!(b.round(1)[0].teams[0].team, "Alpha");
    assert_eq!(b.round(1)[0].teams[0].score, "3");
}

#[test]
fn empty_table_yields_three_empty_rounds() {
    let b = groups_of("");
    assert!(b.is_empty());
    let b = groups_of("Round,Bracket,Team,Score\n");
    assert!(b.is_empty());
}

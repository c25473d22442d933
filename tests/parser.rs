// tests/parser.rs
//
// CSV state machine: quoting, line-break normalization, blank-row
// filtering, EOF flush, and the deliberate unterminated-quote
// permissiveness.

use bracket_board::core::csv::{Delim, parse_rows, rows_to_string};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn plain_rows() {
    let rows = parse_rows("a,b,c\nd,e,f\n");
    assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["d", "e", "f"])]);
}

#[test]
fn quoted_comma_stays_in_cell() {
    let rows = parse_rows("1,\"Match, 1\",Alpha,3\n");
    assert_eq!(rows, vec![row(&["1", "Match, 1", "Alpha", "3"])]);
}

#[test]
fn doubled_quote_escapes() {
    let rows = parse_rows("\"say \"\"hi\"\"\",x\n");
    assert_eq!(rows, vec![row(&["say \"hi\"", "x"])]);
}

#[test]
fn crlf_and_lone_cr_are_row_breaks() {
    let rows = parse_rows("a,b\r\nc,d\re,f");
    assert_eq!(
        rows,
        vec![row(&["a", "b"]), row(&["c", "d"]), row(&["e", "f"])]
    );
}

#[test]
fn quoted_crlf_lands_as_single_newline() {
    let rows = parse_rows("\"one\r\ntwo\",x\n");
    assert_eq!(rows, vec![row(&["one\ntwo", "x"])]);
}

#[test]
fn blank_rows_are_dropped() {
    let with_blanks = parse_rows("a,b\n\n  , \nc,d\n");
    let without = parse_rows("a,b\nc,d\n");
    assert_eq!(with_blanks, without);
}

#[test]
fn eof_flushes_trailing_row() {
    let rows = parse_rows("a,b\nc,d");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], row(&["c", "d"]));

    // A trailing newline must not produce a phantom row.
    assert_eq!(parse_rows("a,b\n").len(), 1);
}

#[test]
fn unterminated_quote_swallows_the_rest() {
    // Once the quote opens and never closes, commas and newlines are
    // content. Kept on purpose.
    let rows = parse_rows("a,\"b,c\nd");
    assert_eq!(rows, vec![row(&["a", "b,c\nd"])]);
}

#[test]
fn write_then_parse_round_trips() {
    let table = vec![
        row(&["plain", "with,comma", "with \"quote\""]),
        row(&["multi\nline", "", "tail"]),
    ];
    let text = rows_to_string(&table, Delim::Csv);
    assert_eq!(parse_rows(&text), table);
}

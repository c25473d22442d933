// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Output cell separator. Feed *parsing* is always comma; TSV exists
/// only on the export side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn as_char(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Character-level CSV parser: two states (quoted / unquoted), no
/// lookbehind. Tolerances, all deliberate:
/// - `""` inside a quoted field emits a literal quote.
/// - CR and CRLF collapse to LF before the state machine sees them,
///   so a quoted CRLF lands in the cell as a single `\n`.
/// - Rows whose every cell trims to empty are dropped.
/// - An unterminated quote runs to EOF; the remaining commas and
///   line breaks are field content. Garbage in, one long cell out.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // Line-break normalization applies in *both* states.
        let ch = if ch == '\r' {
            if matches!(chars.peek(), Some('\n')) {
                chars.next();
            }
            '\n'
        } else {
            ch
        };

        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' if !in_quotes => {
                row.push(take(&mut field));
                if is_blank_row(&row) {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing field/row, but not the phantom row a final
    // newline would otherwise produce.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        if !is_blank_row(&row) {
            rows.push(row);
        }
    }

    rows
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.as_char();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows as-is (no transforms).
pub fn rows_to_string(rows: &[Vec<String>], delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

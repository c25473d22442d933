// src/core/natsort.rs
//
// Numeric-aware, ASCII case-insensitive ordering for display titles,
// so "Match 2" sorts before "Match 10". Digit runs compare as
// integers (leading zeros stripped, then by length, then digit by
// digit); everything else compares lowercased char by char; equal
// segments keep scanning.

use std::cmp::Ordering;

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let ra = run_end(&a, i);
            let rb = run_end(&b, j);
            match cmp_digit_runs(&a[i..ra], &b[j..rb]) {
                Ordering::Equal => {
                    i = ra;
                    j = rb;
                }
                ord => return ord,
            }
        } else {
            let ca = a[i].to_ascii_lowercase();
            let cb = b[j].to_ascii_lowercase();
            match ca.cmp(&cb) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                ord => return ord,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn run_end(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn cmp_digit_runs(a: &[char], b: &[char]) -> Ordering {
    // Strip leading zeros so "007" and "7" carry the same value.
    let a = trim_zeros(a);
    let b = trim_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_zeros(run: &[char]) -> &[char] {
    let nz = run.iter().position(|c| *c != '0').unwrap_or(run.len());
    &run[nz..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut titles: Vec<&str>) -> Vec<&str> {
        titles.sort_by(|a, b| natural_cmp(a, b));
        titles
    }

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(
            sorted(vec!["Match 10", "Match 2", "Match 1"]),
            vec!["Match 1", "Match 2", "Match 10"]
        );
    }

    #[test]
    fn case_insensitive_text() {
        assert_eq!(natural_cmp("match 3", "MATCH 3"), Ordering::Equal);
        assert_eq!(natural_cmp("Final", "final B"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_equal_then_scan_continues() {
        assert_eq!(natural_cmp("m 07 a", "m 7 a"), Ordering::Equal);
        assert_eq!(natural_cmp("m 07 a", "m 7 b"), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(natural_cmp("Semifinal", "Semifinal 2"), Ordering::Less);
    }
}

// src/core/num.rs
//
// Lenient numeric parsing for cell text. Feeds are typed by humans:
// "2", " 2 ", "2.9", "3.5 pts" all carry a usable number up front.
// Both functions read the longest numeric prefix and ignore the rest;
// no prefix at all yields None.

/// Integer prefix: optional sign, then decimal digits. "2.9" → 2.
pub fn leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let b = t.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let digits = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits {
        return None;
    }
    t[..i].parse::<i64>().ok()
}

/// Float prefix: sign, digits, optional fraction, optional exponent
/// (kept only when the exponent carries digits). "3.5 pts" → 3.5.
pub fn leading_float(text: &str) -> Option<f64> {
    let t = text.trim_start();
    let b = t.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let mant = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
    }
    if !t[mant..i].bytes().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut end = i;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp {
            end = j;
        }
    }
    t[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefixes() {
        assert_eq!(leading_int("2"), Some(2));
        assert_eq!(leading_int(" 2 "), Some(2));
        assert_eq!(leading_int("2.9"), Some(2));
        assert_eq!(leading_int("-3rd"), Some(-3));
        assert_eq!(leading_int("round 2"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("+"), None);
    }

    #[test]
    fn float_prefixes() {
        assert_eq!(leading_float("3.5 pts"), Some(3.5));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("7"), Some(7.0));
        assert_eq!(leading_float("1e3"), Some(1000.0));
        assert_eq!(leading_float("1e"), Some(1.0));
        assert_eq!(leading_float("abc"), None);
        assert_eq!(leading_float(""), None);
    }
}

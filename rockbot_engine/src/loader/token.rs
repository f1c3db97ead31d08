//! Token-extraction primitives shared by the record parsers.
//!
//! Each primitive scans a borrowed slice and reports failure explicitly, so
//! the record parsers stay a flat composition of named operations instead of
//! ad-hoc index arithmetic.

/// Tail of `s` starting just after the first occurrence of `lit`.
pub fn after_literal<'a>(s: &'a str, lit: &str) -> Option<&'a str> {
    let start = s.find(lit)? + lit.len();
    Some(&s[start..])
}

/// Tail of `s` starting just after the first occurrence of `c`.
pub fn after_char(s: &str, c: char) -> Option<&str> {
    let start = s.find(c)? + c.len_utf8();
    Some(&s[start..])
}

/// Leading integer of `s` plus the tail after its digits: skips ASCII
/// whitespace, honors one sign, then consumes ASCII digits, stopping at the
/// first non-digit. `None` when no digits are present. Saturates rather than
/// wrapping on overflow.
pub fn split_leading_int(s: &str) -> Option<(i64, &str)> {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(tail) => (true, tail),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut value: i64 = 0;
    for b in rest[..digits].bytes() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    Some((if negative { -value } else { value }, &rest[digits..]))
}

/// Leading integer of `s` with C `atoi` semantics: 0 when no digits follow
/// the optional whitespace and sign.
pub fn leading_int(s: &str) -> i64 {
    split_leading_int(s).map_or(0, |(value, _)| value)
}

/// Span between the first pair of `"` characters, plus the tail after the
/// closing quote. `None` if either quote is missing.
pub fn quoted(s: &str) -> Option<(&str, &str)> {
    let body = after_char(s, '"')?;
    let close = body.find('"')?;
    Some((&body[..close], &body[close + 1..]))
}

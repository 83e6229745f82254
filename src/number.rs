//! Browser-compatible number parsing and `en-US` fixed-point formatting.
//!
//! DESIGN
//! ======
//! Amounts arrive as text scraped from the page or from storage, so parsing
//! mirrors the lenient prefix semantics of the browser's `parseFloat`: the
//! longest numeric prefix wins and anything else is NaN. Formatting rounds
//! the shortest decimal representation of the value (what the user sees),
//! not its binary expansion, so `1.005` becomes `1.01`.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

const INFINITY_LITERAL: &str = "Infinity";

/// Parse the longest leading decimal literal in `raw`, or NaN.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent, or the literal `Infinity`.
/// Trailing garbage is ignored (`"12px"` parses as `12`).
pub fn parse_float(raw: &str) -> f64 {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if body.starts_with(INFINITY_LITERAL) {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let Some(literal) = numeric_prefix(body) else {
        return f64::NAN;
    };
    let magnitude = literal.parse::<f64>().unwrap_or(f64::NAN);
    if negative { -magnitude } else { magnitude }
}

/// Build a normalized literal (`int.frac[e±exp]`) from the numeric prefix of `body`.
fn numeric_prefix(body: &str) -> Option<String> {
    let bytes = body.as_bytes();
    let mut pos = 0;

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &body[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &body[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(pos + 8);
    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    literal.push('.');
    literal.push_str(if frac_digits.is_empty() { "0" } else { frac_digits });

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        let mut exp_sign = "";
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'+' || bytes[exp_pos] == b'-') {
            exp_sign = &body[exp_pos..=exp_pos];
            exp_pos += 1;
        }
        let exp_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_start {
            literal.push('e');
            literal.push_str(exp_sign);
            literal.push_str(&body[exp_start..exp_pos]);
        }
    }

    Some(literal)
}

/// Format `value` with exactly two fraction digits, `,` grouping and `.` decimal point.
///
/// Rounds half away from zero. NaN renders as `NaN`; infinities render as
/// `∞` / `-∞`. Negative zero keeps its sign.
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let negative = value.is_sign_negative();
    if value.is_infinite() {
        return if negative { "-∞".to_string() } else { "∞".to_string() };
    }

    // Display for f64 yields the shortest round-trip digits without an exponent.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let frac_bytes = frac_part.as_bytes();
    for idx in 0..2 {
        digits.push(frac_bytes.get(idx).map_or(0, |b| b - b'0'));
    }
    if frac_bytes.get(2).is_some_and(|b| *b >= b'5') {
        round_up(&mut digits);
    }

    let int_digits = &digits[..digits.len() - 2];
    let frac_digits = &digits[digits.len() - 2..];

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_digits));
    out.push('.');
    for d in frac_digits {
        out.push(char::from(b'0' + d));
    }
    out
}

/// Add one unit in the last place, growing a leading digit on overflow.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

fn group_thousands(int_digits: &[u8]) -> String {
    let mut out = String::with_capacity(int_digits.len() + int_digits.len() / 3);
    for (idx, d) in int_digits.iter().enumerate() {
        if idx > 0 && (int_digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

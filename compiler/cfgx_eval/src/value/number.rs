//! JavaScript number conversions.

/// Format a number the way `String(n)` does.
///
/// Integral values print without a fraction, `-0` prints as `0`, and very
/// large or very small magnitudes use exponent notation with an explicit
/// sign (`1e+21`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // Rust's shortest round-trip form matches JS in this range.
        return format!("{n}");
    }

    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => exp,
    }
}

/// `ToNumber` applied to a string.
///
/// Surrounding whitespace is ignored and the empty string is `0`. Hex,
/// octal and binary prefixes are honored; anything else that is not a
/// decimal literal is `NaN`.
#[expect(clippy::cast_precision_loss, reason = "JS numbers are doubles")]
pub(crate) fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).map_or(f64::NAN, |n| n as f64);
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    // Rust also accepts "inf" and "nan", which JS does not.
    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// `ToInt32`: truncate, wrap modulo 2^32, reinterpret as signed.
#[expect(clippy::cast_possible_truncation, reason = "wrapped value is within i32 range")]
pub fn to_int32(n: f64) -> i32 {
    const TWO_32: f64 = 4_294_967_296.0;
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(TWO_32);
    let signed = if wrapped >= TWO_32 / 2.0 {
        wrapped - TWO_32
    } else {
        wrapped
    };
    signed as i32
}

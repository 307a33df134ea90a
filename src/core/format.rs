//! Numeral parsing and display formatting.
//!
//! The keypad edits numerals as text, so every arithmetic step goes through
//! a lenient parse (the longest numeric prefix wins) and every result goes
//! back to text through the same shortest round-trip rendering the display
//! uses.

/// Magnitude at or above which the display switches to scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e15;

/// Non-zero magnitudes below this render in scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-10;

/// Fractional digits shown in scientific notation.
pub const SCIENTIFIC_DIGITS: usize = 6;

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped, an optional sign is accepted, and
/// `Infinity` is recognised. Anything without at least one mantissa digit
/// yields NaN rather than an error.
///
/// # Example
///
/// ```rust
/// use lambdacalc::core::parse_numeral;
///
/// assert_eq!(parse_numeral("12.5"), 12.5);
/// assert_eq!(parse_numeral("1.2.3"), 1.2);
/// assert_eq!(parse_numeral("7."), 7.0);
/// assert!(parse_numeral(".").is_nan());
/// ```
pub fn parse_numeral(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        end = j;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number in its default textual form.
///
/// This is the form stored back into the numeral under edit: integers have
/// no fractional part, magnitudes in `[1e-6, 1e21)` are written out in
/// positional notation, and anything else uses a signed exponent.
///
/// # Example
///
/// ```rust
/// use lambdacalc::core::numeral_string;
///
/// assert_eq!(numeral_string(5.0), "5");
/// assert_eq!(numeral_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(numeral_string(1e21), "1e+21");
/// assert_eq!(numeral_string(1.5e-7), "1.5e-7");
/// ```
pub fn numeral_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        signed_exponent(&format!("{:e}", value))
    }
}

/// Significant digits after the first needed to write any `f64` exactly.
const EXACT_DIGITS: usize = 767;

/// Render `value` in scientific notation with `digits` fractional digits.
///
/// An exact half in the first dropped digit rounds away from zero.
///
/// # Example
///
/// ```rust
/// use lambdacalc::core::exponential;
///
/// assert_eq!(exponential(1.23456e20, 6), "1.234560e+20");
/// assert_eq!(exponential(-2.5e-12, 6), "-2.500000e-12");
/// assert_eq!(exponential(1000000500000000.0, 6), "1.000001e+15");
/// ```
pub fn exponential(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return numeral_string(value);
    }

    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return signed_exponent(&format!("{:.*e}", digits, value));
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return signed_exponent(&format!("{:.*e}", digits, value));
    };

    let mut kept: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let round_up = kept.get(digits + 1).is_some_and(|d| *d >= b'5');
    kept.truncate(digits + 1);

    if round_up {
        let mut carried = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carried = false;
                break;
            }
        }
        if carried {
            kept.insert(0, b'1');
            kept.truncate(digits + 1);
            exponent += 1;
        }
    }

    let mut rendered = String::with_capacity(digits + 8);
    if value.is_sign_negative() && value != 0.0 {
        rendered.push('-');
    }
    rendered.push(char::from(kept[0]));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(kept[1..].iter().map(|&d| char::from(d)));
    }
    rendered.push('e');
    if exponent >= 0 {
        rendered.push('+');
    }
    rendered.push_str(&exponent.to_string());
    rendered
}

/// Format a value for the main display.
///
/// Very large and very small non-zero magnitudes use scientific notation,
/// NaN collapses to `"0"`, everything else uses [`numeral_string`].
///
/// # Example
///
/// ```rust
/// use lambdacalc::core::format_for_display;
///
/// assert_eq!(format_for_display(5.0), "5");
/// assert_eq!(format_for_display(1.23456e20), "1.234560e+20");
/// assert_eq!(format_for_display(f64::NAN), "0");
/// ```
pub fn format_for_display(value: f64) -> String {
    if value.is_nan() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || (value != 0.0 && magnitude < SCIENTIFIC_LOWER) {
        exponential(value, SCIENTIFIC_DIGITS)
    } else {
        numeral_string(value)
    }
}

/// Parse a numeral and format it for display in one step.
pub fn format_numeral(text: &str) -> String {
    format_for_display(parse_numeral(text))
}

fn signed_exponent(rendered: &str) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => rendered.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_numerals() {
        assert_eq!(parse_numeral("0"), 0.0);
        assert_eq!(parse_numeral("42"), 42.0);
        assert_eq!(parse_numeral("-3.25"), -3.25);
        assert_eq!(parse_numeral(".5"), 0.5);
    }

    #[test]
    fn parse_takes_longest_prefix() {
        assert_eq!(parse_numeral("1.2.3"), 1.2);
        assert_eq!(parse_numeral("12abc"), 12.0);
        assert_eq!(parse_numeral("  8"), 8.0);
    }

    #[test]
    fn parse_handles_exponents() {
        assert_eq!(parse_numeral("1e+21"), 1e21);
        assert_eq!(parse_numeral("1.5e-7"), 1.5e-7);
        assert_eq!(parse_numeral("3e"), 3.0);
        assert_eq!(parse_numeral("3e+"), 3.0);
    }

    #[test]
    fn parse_handles_infinity() {
        assert_eq!(parse_numeral("Infinity"), f64::INFINITY);
        assert_eq!(parse_numeral("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_yields_nan_without_digits() {
        assert!(parse_numeral("").is_nan());
        assert!(parse_numeral(".").is_nan());
        assert!(parse_numeral("-").is_nan());
        assert!(parse_numeral("NaN").is_nan());
    }

    #[test]
    fn numeral_string_matches_default_rendering() {
        assert_eq!(numeral_string(5.0), "5");
        assert_eq!(numeral_string(-0.0), "0");
        assert_eq!(numeral_string(2.5), "2.5");
        assert_eq!(numeral_string(1e20), "100000000000000000000");
        assert_eq!(numeral_string(0.000001), "0.000001");
        assert_eq!(numeral_string(1e-7), "1e-7");
        assert_eq!(numeral_string(f64::INFINITY), "Infinity");
        assert_eq!(numeral_string(f64::NAN), "NaN");
    }

    #[test]
    fn display_switches_to_scientific_at_bounds() {
        assert_eq!(format_for_display(1e15), "1.000000e+15");
        assert_eq!(format_for_display(999_999_999_999_999.0), "999999999999999");
        assert_eq!(format_for_display(1e-11), "1.000000e-11");
        assert_eq!(format_for_display(0.0), "0");
    }

    #[test]
    fn display_of_large_value_has_six_fractional_digits() {
        let rendered = format_for_display(1.23456e20);
        assert_eq!(rendered, "1.234560e+20");
        let (mantissa, _) = rendered.split_once('e').unwrap();
        assert_eq!(mantissa.split_once('.').unwrap().1.len(), 6);
    }

    #[test]
    fn exact_half_rounds_away_from_zero() {
        assert_eq!(format_for_display(1000000500000000.0), "1.000001e+15");
        assert_eq!(format_for_display(1000002500000000.0), "1.000003e+15");
        assert_eq!(format_for_display(-1000000500000000.0), "-1.000001e+15");
    }

    #[test]
    fn rounding_carries_into_the_exponent() {
        assert_eq!(exponential(9999999500000000.0, 6), "1.000000e+16");
        assert_eq!(exponential(9.5, 0), "1e+1");
        assert_eq!(exponential(0.0, 6), "0.000000e+0");
    }

    #[test]
    fn display_of_nan_is_zero() {
        assert_eq!(format_for_display(f64::NAN), "0");
        assert_eq!(format_numeral("."), "0");
    }

    #[test]
    fn display_of_infinity_is_scientific_branch() {
        assert_eq!(format_for_display(f64::INFINITY), "Infinity");
    }
}

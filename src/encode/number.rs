use super::round_half_up;

/// Thousands separator of Chilean Spanish (es-CL).
const THOUSANDS_SEPARATOR: char = '.';

/// U+2212 MINUS SIGN
const MINUS_SIGN: char = '\u{2212}';

const NOT_AVAILABLE: &str = "N/A";

/// Format a predicted count for display: rounded to an integer, es-CL digit
/// grouping, and an explicit sign. `None` and NaN render as "N/A".
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| !v.is_nan()) else { return NOT_AVAILABLE.into() };

    // -0.4 rounds to +0, which is shown as non-negative.
    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { MINUS_SIGN } else { '+' };

    if rounded.is_infinite() { return format!("{sign}∞") }
    format!("{sign}{}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Format a z-score with two decimals, as shown next to its category.
pub fn format_z(z: Option<f64>) -> String {
    match z {
        Some(z) if !z.is_nan() => format!("{z:.2}"),
        _ => NOT_AVAILABLE.into(),
    }
}

/// Insert a separator every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 { out.push(THOUSANDS_SEPARATOR) }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_then_signs() {
        assert_eq!(format_number(Some(1500.4)), "+1.500");
        assert_eq!(format_number(Some(-1500.6)), "\u{2212}1.501");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_number(Some(2.5)), "+3");
        assert_eq!(format_number(Some(-2.5)), "\u{2212}2");
    }

    #[test]
    fn zero_is_non_negative() {
        assert_eq!(format_number(Some(0.0)), "+0");
        assert_eq!(format_number(Some(-0.0)), "+0");
        assert_eq!(format_number(Some(-0.4)), "+0");
    }

    #[test]
    fn grouping() {
        assert_eq!(format_number(Some(7.0)), "+7");
        assert_eq!(format_number(Some(999.0)), "+999");
        assert_eq!(format_number(Some(1000.0)), "+1.000");
        assert_eq!(format_number(Some(-12_345.0)), "\u{2212}12.345");
        assert_eq!(format_number(Some(1_234_567.0)), "+1.234.567");
    }

    #[test]
    fn large_integers_stay_exact() {
        assert_eq!(format_number(Some(4503599627370497.0)), "+4.503.599.627.370.497");
        assert_eq!(format_number(Some(0.49999999999999994)), "+0");
    }

    #[test]
    fn absent_values() {
        assert_eq!(format_number(None), "N/A");
        assert_eq!(format_number(Some(f64::NAN)), "N/A");
        assert_eq!(format_z(None), "N/A");
    }

    #[test]
    fn z_two_decimals() {
        assert_eq!(format_z(Some(2.5)), "2.50");
        assert_eq!(format_z(Some(-0.126)), "-0.13");
    }
}

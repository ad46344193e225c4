/// Render a result for the display field.
///
/// Uses the shortest digits that round-trip. Magnitudes in `[1e-3, 1e7)` are
/// written as plain decimals with at least one fractional digit (`16.0`,
/// `0.001`); everything else as `d.dddEn` (`1.0E7`, `1.0E-4`). Infinities and
/// `NaN` are spelled out.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0.0".to_owned()
        } else {
            "0.0".to_owned()
        };
    }

    let (digits, exp) = decompose(value.abs());
    let body = if (-3..7).contains(&exp) {
        plain(&digits, exp)
    } else {
        scientific(&digits, exp)
    };

    if value.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Significant digits of a positive finite `value`, without leading or
/// trailing zeros, and the decimal exponent of the first one:
/// `value == d1.d2d3... * 10^exp`.
fn decompose(value: f64) -> (String, i32) {
    let mut buf = ryu::Buffer::new();
    let text = buf.format_finite(value);

    let (mantissa, exp) = match text.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (text, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all = format!("{int_part}{frac_part}");
    let significant = all.trim_start_matches('0');
    let leading = all.len() - significant.len();

    let int_len = i32::try_from(int_part.len()).unwrap_or(i32::MAX);
    let leading = i32::try_from(leading).unwrap_or(0);
    (
        significant.trim_end_matches('0').to_owned(),
        exp + int_len - 1 - leading,
    )
}

fn plain(digits: &str, exp: i32) -> String {
    if let Ok(zeros) = usize::try_from(-exp - 1) {
        return format!("0.{}{digits}", "0".repeat(zeros));
    }

    let int_len = usize::try_from(exp + 1).unwrap_or(0);
    if digits.len() <= int_len {
        format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

fn scientific(digits: &str, exp: i32) -> String {
    let (first, rest) = digits.split_at(1);
    let rest = if rest.is_empty() { "0" } else { rest };
    format!("{first}.{rest}E{exp}")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn check(cases: &[(f64, &str)]) {
        for &(value, want) in cases {
            assert_eq!(format_result(value), want, "formatting {value:e}");
        }
    }

    #[test]
    fn test_integral_values_keep_fraction() {
        check(&[(2.0, "2.0"), (-16.0, "-16.0"), (0.0, "0.0"), (-0.0, "-0.0")]);
    }

    #[test]
    fn test_fractions() {
        check(&[
            (0.5, "0.5"),
            (123.45, "123.45"),
            (-0.25, "-0.25"),
            (0.1 + 0.2, "0.30000000000000004"),
        ]);
    }

    #[test]
    fn test_switches_to_exponent_at_ten_million() {
        check(&[
            (9_999_999.0, "9999999.0"),
            (1e7, "1.0E7"),
            (1.234_567_8e7, "1.2345678E7"),
            (-1e7, "-1.0E7"),
            (1e15, "1.0E15"),
            (1e16, "1.0E16"),
            (1e20, "1.0E20"),
            (f64::MAX, "1.7976931348623157E308"),
        ]);
    }

    #[test]
    fn test_switches_to_exponent_below_one_thousandth() {
        check(&[
            (0.001, "0.001"),
            (0.001_25, "0.00125"),
            (1e-4, "1.0E-4"),
            (-2.5e-7, "-2.5E-7"),
        ]);
    }

    #[test]
    fn test_non_finite() {
        check(&[
            (f64::INFINITY, "Infinity"),
            (f64::NEG_INFINITY, "-Infinity"),
            (f64::NAN, "NaN"),
        ]);
    }
}

use simple_calc_sdk::{CalculatorError, FieldId, NumeralError};

/// Special-value words `f64::from_str` accepts beyond `Infinity` and `NaN`.
const LENIENT_SPECIAL_VALUES: [&str; 3] = ["inf", "infinity", "nan"];

/// Parse the raw text of an operand field.
///
/// An empty field counts as `0`. Surrounding ASCII control characters and
/// spaces are ignored, but a field holding only those is not empty and fails
/// to parse. Special values must be spelled exactly `Infinity` or `NaN`,
/// optionally signed.
///
/// # Errors
/// Returns `CalculatorError::Parse` when the text is not a decimal numeral.
pub fn parse_operand(field: FieldId, raw: &str) -> Result<f64, CalculatorError> {
    let text = if raw.is_empty() {
        "0"
    } else {
        raw.trim_matches(|c: char| c <= ' ')
    };
    parse_numeral(text).map_err(|source| CalculatorError::Parse {
        field,
        text: raw.to_owned(),
        source,
    })
}

fn parse_numeral(text: &str) -> Result<f64, NumeralError> {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let misspelled = !matches!(body, "Infinity" | "NaN")
        && LENIENT_SPECIAL_VALUES
            .iter()
            .any(|word| body.eq_ignore_ascii_case(word));
    if misspelled {
        return Err(NumeralError::SpecialValueSpelling);
    }
    Ok(text.parse::<f64>()?)
}

//! Currency parsing and best-effort attribute coercion.

use crate::catalog::types::AttrValue;

/// Parse a Brazilian Real amount out of free text.
///
/// Handles both comma-decimal ("R$ 1.234,56") and period-decimal ("1234.56")
/// forms: currency symbols and whitespace are stripped, then the decimal
/// separator is inferred from the position of the last comma or period.
/// This function never fails; anything unparseable yields 0.0.
pub fn parse_price_brl(text: &str) -> f64 {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.replace("R$", "").replace("r$", "");
    let digits: String = compact
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if digits.is_empty() {
        return 0.0;
    }

    let commas = digits.matches(',').count();
    let periods = digits.matches('.').count();
    let len = digits.len();

    let normalized = if commas == 1 && len >= 3 && digits.as_bytes()[len - 3] == b',' {
        // Comma is the decimal separator; periods are thousands.
        digits.replace('.', "").replace(',', ".")
    } else if periods == 1 && len >= 3 && digits.as_bytes()[len - 3] == b'.' {
        digits
    } else {
        let collapsed = if periods > 1 {
            digits.replace('.', "")
        } else {
            digits
        };
        collapsed.replace(',', ".")
    };

    normalized.parse().unwrap_or(0.0)
}

/// Best-effort coercion of a free-text field into a typed attribute.
///
/// Recognizes booleans in Portuguese and English, strips common unit
/// suffixes (GB, TB, MHz, mm, W) off numeric-looking values, and leaves
/// everything else as text.
pub fn coerce_attribute(raw: &str) -> AttrValue {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();

    match lower.as_str() {
        "true" | "sim" | "yes" => return AttrValue::Bool(true),
        "false" | "não" | "no" => return AttrValue::Bool(false),
        _ => {}
    }

    let mut numeric = lower;
    for unit in ["gb", "g", "tb", "mhz", "mm", "w"] {
        numeric = numeric.replace(unit, "");
    }
    let numeric = numeric.trim();
    if !numeric.is_empty() {
        if numeric.contains('.') {
            if let Ok(value) = numeric.parse::<f64>() {
                return AttrValue::Float(value);
            }
        } else if let Ok(value) = numeric.parse::<i64>() {
            return AttrValue::Int(value);
        }
    }

    AttrValue::Text(trimmed.to_string())
}

//! Text conversions at the presentation boundary.

/// Placeholder shown for an absent result.
pub const PLACEHOLDER: &str = "-";

/// Parse the raw contents of a numeric input field.
///
/// An empty (or whitespace-only) field is absent. Anything that fails to
/// parse as a finite number is absent as well, so `inf` and `NaN` never
/// reach the derivation chain.
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            log::debug!("Ignoring non-finite input {:?} ({})", raw, value);
            None
        }
        Err(e) => {
            log::debug!("Ignoring non-numeric input {:?}: {}", raw, e);
            None
        }
    }
}

/// Format a derived value with exactly two decimals, or the placeholder.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_is_absent() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_field("1080"), Some(1080.0));
        assert_eq!(parse_field("53.5"), Some(53.5));
        assert_eq!(parse_field(" 60 "), Some(60.0));
        assert_eq!(parse_field("-12"), Some(-12.0));
        assert_eq!(parse_field("1e3"), Some(1000.0));
    }

    #[test]
    fn parse_zero_is_kept_as_zero() {
        // Zero is dropped later by the derivation chain, not by parsing
        assert_eq!(parse_field("0"), Some(0.0));
    }

    #[test]
    fn parse_garbage_is_absent() {
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("12cm"), None);
    }

    #[test]
    fn parse_non_finite_is_absent() {
        assert_eq!(parse_field("inf"), None);
        assert_eq!(parse_field("-inf"), None);
        assert_eq!(parse_field("infinity"), None);
        assert_eq!(parse_field("NaN"), None);
        assert_eq!(parse_field("1e400"), None);
    }

    #[test]
    fn format_two_decimals() {
        assert_eq!(format_metric(Some(2202.9071)), "2202.91");
        assert_eq!(format_metric(Some(1.0)), "1.00");
        assert_eq!(format_metric(Some(-0.126)), "-0.13");
    }

    #[test]
    fn format_absent_is_dash() {
        assert_eq!(format_metric(None), "-");
    }
}

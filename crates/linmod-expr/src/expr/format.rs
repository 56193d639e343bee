//! Number rendering.

/// Render a number with at least one decimal place.
///
/// Integral values print as `7.0`, everything else uses the shortest
/// round-trip representation. Negative zero prints as `0.0`.
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_keep_one_decimal() {
        assert_eq!(format_number(7.0), "7.0");
        assert_eq!(format_number(-13.0), "-13.0");
        assert_eq!(format_number(-0.0), "0.0");
    }

    #[test]
    fn fractional_values_round_trip() {
        assert_eq!(format_number(3.3), "3.3");
        assert_eq!(format_number(-5.1), "-5.1");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}

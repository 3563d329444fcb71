/// Rounds half-way values towards positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Formats a number for a request parameter.
///
/// Integral values drop the fractional part (`80.0 -> "80"`); everything else
/// uses the shortest representation that round-trips.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Percent-encodes free text (titles, labels, legends, marker text).
///
/// Uses form encoding, so a space becomes `+`.
#[must_use]
pub fn url_encode_text(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_breaks_ties_upwards() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn format_number_trims_integral_values() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn url_encode_text_uses_form_rules() {
        assert_eq!(url_encode_text(" "), "+");
        assert_eq!(url_encode_text("Q1 sales"), "Q1+sales");
        assert_eq!(url_encode_text("a|b,c"), "a%7Cb%2Cc");
        assert_eq!(url_encode_text("x-y_z.*"), "x-y_z.*");
    }
}

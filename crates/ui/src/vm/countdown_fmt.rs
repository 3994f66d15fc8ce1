/// Zero-padded two-digit rendering for countdown tiles ("07", "59").
///
/// Day counts above 99 widen instead of truncating.
#[must_use]
pub fn two_digits(value: u64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::two_digits;

    #[test]
    fn pads_single_digits() {
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(7), "07");
        assert_eq!(two_digits(59), "59");
    }

    #[test]
    fn wide_values_keep_all_digits() {
        assert_eq!(two_digits(365), "365");
    }
}

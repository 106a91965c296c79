//! Free-form currency formatting.
//!
//! Digit grouping needs the total digit count up front, which the
//! left-to-right template walk cannot know; amounts are therefore formatted
//! here as a plain numeric routine instead of a mask template. Single fixed
//! format: `$` prefix, comma thousands groups, exactly two fraction digits.

/// Format a free-form amount: `"1234.5"` -> `"$1,234.50"`.
///
/// Non-digit characters outside the first `.` are ignored; fraction digits
/// beyond the second are truncated. An input with no digits at all yields
/// the empty string.
pub fn format(value: &str) -> String {
    let (int_raw, frac_raw) = match value.split_once('.') {
        Some((i, f)) => (i, f),
        None => (value, ""),
    };

    let int_digits: String = int_raw.chars().filter(char::is_ascii_digit).collect();
    let frac_digits: String = frac_raw.chars().filter(char::is_ascii_digit).collect();
    if int_digits.is_empty() && frac_digits.is_empty() {
        return String::new();
    }

    let int_trimmed = int_digits.trim_start_matches('0');
    let int_part = if int_trimmed.is_empty() { "0" } else { int_trimmed };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut frac = frac_digits;
    frac.truncate(2);
    while frac.len() < 2 {
        frac.push('0');
    }

    format!("${grouped}.{frac}")
}

#[cfg(test)]
mod tests {
    use super::format;

    #[test]
    fn grouping_and_fraction_padding() {
        let cases = [
            ("1234.5", "$1,234.50"),
            ("0.5", "$0.50"),
            (".75", "$0.75"),
            ("7", "$7.00"),
            ("1234567", "$1,234,567.00"),
            ("1000000.99", "$1,000,000.99"),
            ("9.999", "$9.99"),
            ("007", "$7.00"),
            ("$1,234.50", "$1,234.50"),
        ];
        for (input, expected) in cases {
            assert_eq!(format(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn no_digits_means_empty() {
        assert_eq!(format(""), "");
        assert_eq!(format("abc"), "");
    }
}

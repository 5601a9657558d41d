//! Lenient integer parsing for query strings and path segments.

/// Parse the leading base-10 integer of `input`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted; parsing stops at
/// the first non-digit, so `"12abc"` is 12 and `"3.7"` is 3. Returns `None`
/// when no digit follows the optional sign. Values beyond the `i64` range
/// saturate instead of failing.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen_digit.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_integers() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("  12"), Some(12));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.7"), Some(3));
        assert_eq!(parse_leading_int("1e3"), Some(1));
    }

    #[test]
    fn rejects_inputs_without_leading_digits() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(" + 3"), None);
    }

    #[test]
    fn saturates_on_overflow() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999999"), Some(i64::MIN));
    }
}

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::interpreter::value::scalar::Scalar;

/// Converts a decimal literal such as `42` or `1.25` into an exact scalar.
///
/// The fractional digits become a power-of-ten denominator, so `1.25` is
/// `5/4` after reduction. Signs are not accepted; negation is a separate
/// operator.
///
/// ## Returns
/// - `Some(Scalar)`: The exact value of the literal.
/// - `None`: If the text is not a decimal literal.
///
/// ## Example
/// ```
/// use ratmat::{interpreter::value::scalar::Scalar, util::num::parse_decimal};
///
/// assert_eq!(parse_decimal("1.25"), Some(Scalar::new(5, 4).unwrap()));
/// assert_eq!(parse_decimal("7"), Some(Scalar::from(7)));
/// assert_eq!(parse_decimal("99999999999999999999").unwrap().to_string(),
///            "99999999999999999999");
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Scalar> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit())
       || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let digits = format!("{whole}{fraction}");
    let numerator = digits.parse::<BigInt>().ok()?;
    let denominator = num_traits::pow(BigInt::from(10), fraction.len());

    Scalar::from_parts(numerator, denominator).ok()
}

/// Converts a count (rank, nullity, dimension) into an integer scalar.
///
/// ## Example
/// ```
/// use ratmat::{interpreter::value::scalar::Scalar, util::num::count_to_scalar};
///
/// assert_eq!(count_to_scalar(3), Scalar::from(3));
/// ```
#[must_use]
pub fn count_to_scalar(count: usize) -> Scalar {
    Scalar::from(BigInt::from(count))
}

/// Converts an integer scalar into a count, e.g. the size passed to
/// `identity(n)`.
///
/// ## Returns
/// - `Some(usize)`: If the scalar is a non-negative integer.
/// - `None`: If it is fractional, negative, or too large to address.
#[must_use]
pub fn scalar_to_count(value: &Scalar) -> Option<usize> {
    if !value.is_integer() {
        return None;
    }
    value.numer().to_usize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_are_exact() {
        assert_eq!(parse_decimal("0.1"), Some(Scalar::new(1, 10).unwrap()));
        assert_eq!(parse_decimal("2.50"), Some(Scalar::new(5, 2).unwrap()));
        assert_eq!(parse_decimal("0"), Some(Scalar::zero()));
    }

    #[test]
    fn malformed_decimals_are_rejected() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal(".5"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("-1"), None);
    }

    #[test]
    fn long_literals_keep_every_digit() {
        let tiny = parse_decimal("0.00000000000000000001").unwrap();
        assert_eq!(tiny.to_string(), "1/100000000000000000000");
        let huge = parse_decimal("123456789012345678901234567890.5").unwrap();
        assert_eq!(huge.to_string(), "246913578024691357802469135781/2");
    }

    #[test]
    fn counts_round_trip() {
        assert_eq!(scalar_to_count(&count_to_scalar(4)), Some(4));
        assert_eq!(scalar_to_count(&Scalar::from(-1)), None);
        assert_eq!(scalar_to_count(&Scalar::new(1, 2).unwrap()), None);
        assert_eq!(scalar_to_count(&parse_decimal(&"9".repeat(40)).unwrap()), None);
    }
}

//! Positional numeral decoding for bases 2 through 36.
//!
//! Digits map '0'..='9' to 0..=9 and ASCII letters (either case) to 10..=35.
//! The most significant digit comes first.

mod error;

pub use error::{DecodeError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Value of a single digit character, or `None` if it is not ASCII alphanumeric.
pub fn digit_value(c: char) -> Option<u32> {
    // to_digit(36) accepts exactly 0-9, a-z and A-Z
    c.to_digit(MAX_BASE)
}

/// Decode `digits` in `base` into an `i64`.
///
/// Magnitudes beyond `i64::MAX` wrap modulo 2^64 and are reinterpreted as a
/// two's complement value. Use [`decode_base_checked`] to reject them instead.
pub fn decode_base(digits: &str, base: u32) -> Result<i64> {
    let values = parse_digits(digits, base)?;

    let wrapped = values.iter().fold(0u64, |acc, &value| {
        acc.wrapping_mul(u64::from(base))
            .wrapping_add(u64::from(value))
    });

    if log::log_enabled!(log::Level::Debug) && fold_checked(&values, base).is_none() {
        log::debug!("{digits:?} in base {base} exceeds i64, wrapping to {}", wrapped as i64);
    }
    log::trace!("decoded {digits:?} in base {base} to {}", wrapped as i64);
    Ok(wrapped as i64)
}

/// Decode `digits` in `base`, failing with [`DecodeError::Overflow`] when the
/// value does not fit in an `i64`.
pub fn decode_base_checked(digits: &str, base: u32) -> Result<i64> {
    let values = parse_digits(digits, base)?;
    fold_checked(&values, base).ok_or_else(|| DecodeError::Overflow {
        digits: digits.to_string(),
        base,
    })
}

fn fold_checked(values: &[u32], base: u32) -> Option<i64> {
    values.iter().try_fold(0i64, |acc, &value| {
        acc.checked_mul(i64::from(base))?.checked_add(i64::from(value))
    })
}

// validates every character before any arithmetic happens
fn parse_digits(digits: &str, base: u32) -> Result<Vec<u32>> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase { base });
    }
    if digits.is_empty() {
        return Err(DecodeError::Empty);
    }

    digits
        .chars()
        .enumerate()
        .map(|(position, character)| {
            let value = digit_value(character).ok_or(DecodeError::InvalidDigit {
                character,
                position,
            })?;
            if value >= base {
                return Err(DecodeError::DigitOutOfRange {
                    character,
                    value,
                    base,
                    position,
                });
            }
            Ok(value)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    // reference formatter for the property tests
    fn to_radix(mut value: u64, base: u32) -> String {
        if value == 0 {
            return "0".to_string();
        }
        let mut out = vec![];
        while value > 0 {
            let digit = (value % u64::from(base)) as u32;
            out.push(std::char::from_digit(digit, base).unwrap());
            value /= u64::from(base);
        }
        out.iter().rev().collect()
    }

    #[test]
    fn test_small_values() {
        assert_eq!(decode_base("111", 2), Ok(7));
        assert_eq!(decode_base("12", 10), Ok(12));
        assert_eq!(decode_base("4", 10), Ok(4));
        assert_eq!(decode_base("ff", 16), Ok(255));
        assert_eq!(decode_base("z", 36), Ok(35));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(decode_base("e1B5E0", 16), decode_base("E1b5e0", 16));
        assert_eq!(decode_base("AbC", 15), Ok(10 * 225 + 11 * 15 + 12));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(decode_base("000101", 2), Ok(5));
    }

    #[test]
    fn test_digit_out_of_range_is_not_invalid_digit() {
        assert_eq!(
            decode_base("1g2", 10),
            Err(DecodeError::DigitOutOfRange {
                character: 'g',
                value: 16,
                base: 10,
                position: 1
            })
        );
        assert!(matches!(
            decode_base("2", 2),
            Err(DecodeError::DigitOutOfRange { value: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            decode_base("1-2", 10),
            Err(DecodeError::InvalidDigit {
                character: '-',
                position: 1
            })
        );
        assert!(matches!(decode_base(" 1", 10), Err(DecodeError::InvalidDigit { position: 0, .. })));
        assert!(matches!(decode_base("1é", 36), Err(DecodeError::InvalidDigit { character: 'é', .. })));
    }

    #[test]
    fn test_invalid_digit_reported_before_later_range_errors() {
        assert!(matches!(decode_base("+9", 2), Err(DecodeError::InvalidDigit { .. })));
    }

    #[test]
    fn test_bad_base_and_empty_input() {
        assert_eq!(decode_base("1", 1), Err(DecodeError::InvalidBase { base: 1 }));
        assert_eq!(decode_base("1", 37), Err(DecodeError::InvalidBase { base: 37 }));
        assert_eq!(decode_base("", 10), Err(DecodeError::Empty));
    }

    #[test]
    fn test_i64_boundary() {
        assert_eq!(decode_base("7fffffffffffffff", 16), Ok(i64::MAX));
        assert_eq!(decode_base_checked("7fffffffffffffff", 16), Ok(i64::MAX));
    }

    #[test]
    fn test_wrapping_past_i64() {
        assert_eq!(decode_base("8000000000000000", 16), Ok(i64::MIN));
        assert_eq!(decode_base("ffffffffffffffff", 16), Ok(-1));
        assert_eq!(decode_base("10000000000000000", 16), Ok(0));
        assert_eq!(
            decode_base("2122212201122002221120200210011020220200", 3),
            Ok(-7658124175476059155)
        );
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(
            decode_base_checked("8000000000000000", 16),
            Err(DecodeError::Overflow {
                digits: "8000000000000000".to_string(),
                base: 16
            })
        );
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('9'), Some(9));
        assert_eq!(digit_value('a'), Some(10));
        assert_eq!(digit_value('Z'), Some(35));
        assert_eq!(digit_value('_'), None);
    }

    proptest! {
        #[test]
        fn prop_matches_positional_conversion(value in 0u64..=(i64::MAX as u64), base in 2u32..=36) {
            let digits = to_radix(value, base);
            prop_assert_eq!(decode_base(&digits, base), Ok(value as i64));
            prop_assert_eq!(decode_base_checked(&digits, base), Ok(value as i64));
            prop_assert_eq!(decode_base(&digits.to_uppercase(), base), Ok(value as i64));
        }

        #[test]
        fn prop_wrapping_agrees_with_checked_when_in_range(digits in "[0-9a-f]{1,20}") {
            if let Ok(exact) = decode_base_checked(&digits, 16) {
                prop_assert_eq!(decode_base(&digits, 16), Ok(exact));
            }
        }
    }
}

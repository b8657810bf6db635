//! Tests for sequence-number parsing and numeric ordering.

use proptest::prelude::*;
use rstest::rstest;

use crate::fragment::SequenceNumber;

#[rstest]
#[case("0", "0")]
#[case("000", "0")]
#[case("42", "42")]
#[case("0042", "42")]
fn parse_normalises_leading_zeros(#[case] digits: &str, #[case] expected: &str) {
    let parsed = SequenceNumber::parse(digits).expect("digits should parse");
    assert_eq!(parsed.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("X")]
#[case("1a")]
#[case("-1")]
#[case("+1")]
#[case(" 1")]
#[case("1_000")]
fn parse_rejects_non_digits(#[case] digits: &str) {
    assert!(SequenceNumber::parse(digits).is_none(), "{digits:?} must be rejected");
}

#[test]
fn ordering_is_numeric_not_lexical() {
    let two = SequenceNumber::parse("2").expect("digits");
    let ten = SequenceNumber::parse("10").expect("digits");
    assert!(two < ten);
    assert!("2" > "10", "lexical order would invert these");
}

#[test]
fn ordering_exceeds_u64_range() {
    let huge = SequenceNumber::parse("123456789012345678901234567890").expect("digits");
    let max = SequenceNumber::from(u64::MAX);
    assert!(max < huge);
    assert_eq!(huge.to_u64(), None);
    assert_eq!(max.to_u64(), Some(u64::MAX));
}

#[test]
fn display_shows_normalised_digits() {
    let parsed = SequenceNumber::parse("0007").expect("digits");
    assert_eq!(parsed.to_string(), "7");
}

proptest! {
    #[test]
    fn ordering_matches_integer_ordering(a in any::<u64>(), b in any::<u64>(), pad in 0_usize..4) {
        let padded = format!("{}{a}", "0".repeat(pad));
        let left = SequenceNumber::parse(&padded).expect("digits");
        let right = SequenceNumber::from(b);
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
    }
}

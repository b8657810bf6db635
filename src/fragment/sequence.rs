//! Numeric ordinals parsed from fragment file names.
//!
//! Provides [`SequenceNumber`], a wrapper around the decimal digits that
//! follow the `.part` marker. Digits are normalised so comparisons are
//! numeric without any width limit: `part2` orders before `part10`, and
//! `part007` equals `part7`.

use std::cmp::Ordering;

use derive_more::Display;

/// Position of a fragment within its group.
///
/// # Examples
///
/// ```
/// use partstitch::fragment::SequenceNumber;
/// let two = SequenceNumber::parse("2").expect("digits");
/// let ten = SequenceNumber::parse("10").expect("digits");
/// assert!(two < ten);
/// assert_eq!(SequenceNumber::parse("007"), Some(SequenceNumber::from(7)));
/// assert!(SequenceNumber::parse("7a").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct SequenceNumber(String);

impl SequenceNumber {
    /// Parse a run of ASCII digits.
    ///
    /// Returns `None` when `digits` is empty or contains anything other than
    /// `0-9`; signs, whitespace, and separators are rejected.
    #[must_use]
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Some(Self::zero())
        } else {
            Some(Self(significant.to_owned()))
        }
    }

    /// Return the first sequence number.
    #[must_use]
    pub fn zero() -> Self { Self("0".to_owned()) }

    /// Borrow the normalised digits.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Return the value as `u64`, or `None` if it does not fit.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> { self.0.parse().ok() }
}

impl From<u64> for SequenceNumber {
    fn from(value: u64) -> Self { Self(value.to_string()) }
}

impl Ord for SequenceNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SequenceNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

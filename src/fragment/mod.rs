//! Fragment naming primitives for part reassembly.
//!
//! This module collects the domain types used to recognise `<base>.part<N>`
//! files and order them for concatenation. Each sub-module focuses on a
//! single concept; none of them perform I/O.

pub mod group;
pub mod name;
pub mod sequence;

pub use group::FragmentGroup;
pub use name::{BaseMatch, Fragment, PART_MARKER, base_name_of, has_marker};
pub use sequence::SequenceNumber;

#[cfg(test)]
mod tests;

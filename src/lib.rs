//! Public API for the `partstitch` library.
//!
//! This crate reassembles files that were split into `<name>.part<N>`
//! fragments, concatenating each group in ascending numeric order, and
//! provides the inverse splitter.

pub mod batch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fragment;
pub mod splitter;
pub mod stitcher;

pub use batch::{BatchReport, GroupOutcome, stitch_all};
pub use config::{SplitConfig, StitchConfig};
pub use discovery::{discover_groups, discover_groups_in, list_entries};
pub use error::{Result, SplitError, StitchError};
pub use fragment::{BaseMatch, Fragment, FragmentGroup, PART_MARKER, SequenceNumber};
pub use splitter::split_file;
pub use stitcher::stitch_group;

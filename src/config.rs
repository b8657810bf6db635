//! Runtime configuration for stitching and splitting.
//!
//! Both structs are plain values built from command-line flags; neither is
//! read from disk.

use std::num::NonZeroUsize;

use crate::fragment::BaseMatch;

/// Suffix appended to each base name when batch mode names its outputs.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_stitched_output.file";

/// Default size of each fragment written by the splitter (8 MiB).
pub const DEFAULT_PART_SIZE: NonZeroUsize = match NonZeroUsize::new(8 * 1024 * 1024) {
    Some(size) => size,
    None => unreachable!(),
};

/// Settings controlling how fragment groups are selected and named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StitchConfig {
    /// Policy deciding which entries belong to a base name.
    pub base_match: BaseMatch,
    /// Suffix used for outputs named automatically in batch mode.
    pub output_suffix: String,
}

impl StitchConfig {
    /// Output file name used for `base_name` in batch mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use partstitch::StitchConfig;
    /// let config = StitchConfig::default();
    /// assert_eq!(config.output_name_for("doc"), "doc_stitched_output.file");
    /// ```
    #[must_use]
    pub fn output_name_for(&self, base_name: &str) -> String {
        format!("{base_name}{}", self.output_suffix)
    }

    /// Replace the base-name match policy.
    #[must_use]
    pub fn with_base_match(mut self, base_match: BaseMatch) -> Self {
        self.base_match = base_match;
        self
    }
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            base_match: BaseMatch::default(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_owned(),
        }
    }
}

/// Settings for splitting a file into fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    /// Maximum number of bytes in each fragment.
    pub part_size: NonZeroUsize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            part_size: DEFAULT_PART_SIZE,
        }
    }
}

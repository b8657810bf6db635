//! File-name convention shared by fragments: `<base>.part<N>`.

use super::SequenceNumber;
use crate::error::StitchError;

/// Marker separating a base name from the sequence digits.
pub const PART_MARKER: &str = ".part";

/// Return `true` if `file_name` carries the fragment marker anywhere.
#[must_use]
pub fn has_marker(file_name: &str) -> bool { file_name.contains(PART_MARKER) }

/// Base name of a fragment: everything before the first marker.
///
/// Returns `None` when the marker is absent.
///
/// # Examples
///
/// ```
/// use partstitch::fragment::base_name_of;
/// assert_eq!(base_name_of("video.mp4.part3"), Some("video.mp4"));
/// assert_eq!(base_name_of("a.part1.part0"), Some("a"));
/// assert_eq!(base_name_of("notes.txt"), None);
/// ```
#[must_use]
pub fn base_name_of(file_name: &str) -> Option<&str> {
    file_name.split_once(PART_MARKER).map(|(base, _)| base)
}

/// Policy deciding which directory entries belong to a requested base name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BaseMatch {
    /// The entry must start with `<base>.part`, so `file` never claims the
    /// fragments of `file2`.
    #[default]
    Exact,
    /// The entry must start with `<base>` and contain the marker anywhere.
    ///
    /// With this policy `file` also selects `file2.part0`.
    Prefix,
}

impl BaseMatch {
    /// Test whether `file_name` belongs to the group named `base_name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use partstitch::fragment::BaseMatch;
    /// assert!(BaseMatch::Exact.matches("file", "file.part0"));
    /// assert!(!BaseMatch::Exact.matches("file", "file2.part0"));
    /// assert!(BaseMatch::Prefix.matches("file", "file2.part0"));
    /// ```
    #[must_use]
    pub fn matches(self, base_name: &str, file_name: &str) -> bool {
        match self {
            Self::Exact => file_name
                .strip_prefix(base_name)
                .is_some_and(|rest| rest.starts_with(PART_MARKER)),
            Self::Prefix => file_name.starts_with(base_name) && has_marker(file_name),
        }
    }
}

/// A directory entry recognised as a fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    file_name: String,
    sequence: SequenceNumber,
}

impl Fragment {
    /// Parse `file_name`, reading the sequence after the last marker.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::MalformedFragmentName`] if the marker is missing
    /// or the text after its last occurrence is not a run of digits.
    pub fn parse(file_name: &str) -> Result<Self, StitchError> {
        let sequence = file_name
            .rsplit_once(PART_MARKER)
            .and_then(|(_, digits)| SequenceNumber::parse(digits))
            .ok_or_else(|| StitchError::MalformedFragmentName {
                name: file_name.to_owned(),
            })?;
        Ok(Self {
            file_name: file_name.to_owned(),
            sequence,
        })
    }

    /// Name of the fragment file inside its directory.
    #[must_use]
    pub fn file_name(&self) -> &str { &self.file_name }

    /// Sequence number parsed from the file name.
    #[must_use]
    pub const fn sequence(&self) -> &SequenceNumber { &self.sequence }
}

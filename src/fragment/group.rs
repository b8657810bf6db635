//! Ordered selection of the fragments that make up one output file.
//!
//! `FragmentGroup` never touches the filesystem; it works on a directory
//! listing supplied by the caller so one listing can serve every group.

use super::{BaseMatch, Fragment};
use crate::error::StitchError;

/// Fragments sharing one base name, sorted by ascending sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentGroup {
    base_name: String,
    fragments: Vec<Fragment>,
}

impl FragmentGroup {
    /// Select and order the fragments of `base_name` from `entries`.
    ///
    /// Entries equal to `exclude` are skipped so an output file written into
    /// the scanned directory is never read back as its own input. The sort is
    /// stable: fragments with equal sequence numbers keep listing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use partstitch::fragment::{BaseMatch, FragmentGroup};
    /// let entries = ["x.part10", "x.part2", "readme.md"].map(String::from);
    /// let group = FragmentGroup::select("x", &entries, BaseMatch::Exact, None)
    ///     .expect("well-formed names");
    /// let names: Vec<_> = group.fragments().iter().map(|f| f.file_name()).collect();
    /// assert_eq!(names, ["x.part2", "x.part10"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::InvalidBaseName`] for an empty base name and
    /// [`StitchError::MalformedFragmentName`] when a selected entry has a
    /// non-numeric sequence suffix.
    pub fn select(
        base_name: &str,
        entries: &[String],
        policy: BaseMatch,
        exclude: Option<&str>,
    ) -> Result<Self, StitchError> {
        if base_name.is_empty() {
            return Err(StitchError::InvalidBaseName);
        }

        let mut fragments = entries
            .iter()
            .filter(|name| exclude != Some(name.as_str()))
            .filter(|name| policy.matches(base_name, name))
            .map(|name| Fragment::parse(name))
            .collect::<Result<Vec<_>, _>>()?;
        fragments.sort_by(|a, b| a.sequence().cmp(b.sequence()));

        Ok(Self {
            base_name: base_name.to_owned(),
            fragments,
        })
    }

    /// Base name shared by the fragments.
    #[must_use]
    pub fn base_name(&self) -> &str { &self.base_name }

    /// Fragments in concatenation order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] { &self.fragments }

    /// Number of selected fragments.
    #[must_use]
    pub fn len(&self) -> usize { self.fragments.len() }

    /// Return `true` when no entry matched the base name.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.fragments.is_empty() }
}

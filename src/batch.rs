//! Orchestration of single-group and whole-directory stitching.
//!
//! Invocation-level failures (unlistable directory, missing output path)
//! abort immediately. In batch mode every other failure is
//! recorded against its group and the remaining groups still run.

use std::path::{Path, PathBuf};

use log::warn;

use crate::{
    config::StitchConfig,
    discovery::{discover_groups, list_entries},
    error::StitchError,
    stitcher::{resolve_output, stitch_group},
};

/// Result of stitching one fragment group.
#[derive(Debug)]
pub struct GroupOutcome {
    base_name: String,
    output: PathBuf,
    result: Result<usize, StitchError>,
}

impl GroupOutcome {
    /// Base name of the group.
    #[must_use]
    pub fn base_name(&self) -> &str { &self.base_name }

    /// Path the group was written to, relative paths already resolved.
    #[must_use]
    pub fn output(&self) -> &Path { &self.output }

    /// Number of fragments written, or the error that stopped the group.
    #[must_use]
    pub fn result(&self) -> Result<usize, &StitchError> { self.result.as_ref().copied() }

    /// Return `true` if the group was stitched completely.
    #[must_use]
    pub fn is_ok(&self) -> bool { self.result.is_ok() }
}

/// Per-group outcomes of one invocation, ordered by base name.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<GroupOutcome>,
}

impl BatchReport {
    /// All outcomes in base-name order.
    #[must_use]
    pub fn outcomes(&self) -> &[GroupOutcome] { &self.outcomes }

    /// Outcomes of groups that were stitched completely.
    pub fn stitched(&self) -> impl Iterator<Item = &GroupOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_ok())
    }

    /// Outcomes of groups that failed.
    pub fn failures(&self) -> impl Iterator<Item = &GroupOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_ok())
    }

    /// Return `true` if any group failed.
    #[must_use]
    pub fn has_failures(&self) -> bool { self.failures().next().is_some() }

    /// Look up the outcome for `base_name`.
    #[must_use]
    pub fn get(&self, base_name: &str) -> Option<&GroupOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.base_name == base_name)
    }
}

/// Stitch one named group, or every group discovered in `directory`.
///
/// With a non-empty `base_name`, only that group is stitched into `output`,
/// which is then required; any failure is returned as an error. Without one
/// (an empty base name counts as none), each
/// discovered base name is stitched into
/// [`StitchConfig::output_name_for`] inside `directory` and failures are
/// recorded in the returned report.
///
/// # Errors
///
/// Returns [`StitchError::MissingOutputPath`] before any I/O,
/// [`StitchError::DirectoryNotFound`] if the directory cannot be listed, and
/// in single-group mode any error raised while stitching the group.
pub fn stitch_all(
    directory: &Path,
    base_name: Option<&str>,
    output: Option<&Path>,
    config: &StitchConfig,
) -> Result<BatchReport, StitchError> {
    if let Some(base_name) = base_name.filter(|base_name| !base_name.is_empty()) {
        let output = output.ok_or(StitchError::MissingOutputPath)?;
        let entries = list_entries(directory)?;
        let written = stitch_group(directory, output, base_name, &entries, config)?;
        return Ok(BatchReport {
            outcomes: vec![GroupOutcome {
                base_name: base_name.to_owned(),
                output: resolve_output(directory, output),
                result: Ok(written),
            }],
        });
    }

    if let Some(output) = output {
        warn!(
            "ignoring output {} because no base filename was given",
            output.display()
        );
    }
    let entries = list_entries(directory)?;
    let outcomes = discover_groups(&entries)
        .into_iter()
        .map(|base_name| {
            let output = PathBuf::from(config.output_name_for(&base_name));
            let result = stitch_group(directory, &output, &base_name, &entries, config);
            if let Err(err) = &result {
                warn!("failed to stitch group {base_name:?}: {err}");
            }
            GroupOutcome {
                output: resolve_output(directory, &output),
                base_name,
                result,
            }
        })
        .collect();
    Ok(BatchReport { outcomes })
}

//! Error types surfaced by stitching and splitting.
//!
//! Each variant carries the path or file name it concerns so the binary can
//! report failures per group without extra context plumbing.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while discovering or stitching fragment groups.
#[derive(Debug, Error)]
pub enum StitchError {
    /// The scan target does not exist or cannot be listed.
    #[error("cannot list directory {}: {source}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Single-group mode was requested without an output destination.
    #[error("an output file is required when a base filename is given")]
    MissingOutputPath,
    /// The requested base name is empty.
    #[error("base filename must not be empty")]
    InvalidBaseName,
    /// The sequence suffix of a matched fragment is not an integer.
    #[error("malformed fragment name {name:?}: sequence suffix is not an integer")]
    MalformedFragmentName { name: String },
    /// A fragment could not be opened or read.
    #[error("failed to read fragment {}: {source}", path.display())]
    FragmentReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file could not be created or written.
    #[error("failed to write output {}: {source}", path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StitchError {
    /// Whether the error aborts a whole invocation rather than a single group.
    #[must_use]
    pub const fn is_fatal_to_batch(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::MissingOutputPath | Self::InvalidBaseName
        )
    }
}

/// Errors produced while splitting a file into fragments.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input file could not be opened or read.
    #[error("failed to read input {}: {source}", path.display())]
    InputReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A fragment file could not be created or written.
    #[error("failed to write fragment {}: {source}", path.display())]
    PartWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input path has no usable file name to derive fragment names from.
    #[error("input path {} has no usable file name", path.display())]
    InvalidInputName { path: PathBuf },
}

/// Result alias for stitching operations.
pub type Result<T, E = StitchError> = std::result::Result<T, E>;

//! Concatenation of one fragment group into a single output file.
//!
//! The output is opened once, truncated, and written in a single pass. Each
//! fragment is opened, streamed through a fixed-size buffer, and closed before
//! the next one is touched. A failure mid-group leaves the partially written
//! output on disk.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{config::StitchConfig, error::StitchError, fragment::FragmentGroup};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Stitch the fragments of `base_name` into `output_path`.
///
/// `entries` is the listing of `directory`, supplied by the caller so batch
/// mode lists the directory only once. A relative `output_path` is resolved
/// against `directory`. Returns the number of fragments written.
///
/// # Errors
///
/// Returns [`StitchError::InvalidBaseName`] for an empty base name,
/// [`StitchError::MalformedFragmentName`] if a selected fragment has a
/// non-numeric suffix, [`StitchError::FragmentReadError`] if a fragment cannot
/// be opened or read (for example, it vanished after listing), and
/// [`StitchError::OutputWriteError`] if the output cannot be created or
/// written.
pub fn stitch_group(
    directory: &Path,
    output_path: &Path,
    base_name: &str,
    entries: &[String],
    config: &StitchConfig,
) -> Result<usize, StitchError> {
    let output = resolve_output(directory, output_path);
    let exclude = output
        .strip_prefix(directory)
        .ok()
        .and_then(|relative| relative.to_str());
    let group = FragmentGroup::select(base_name, entries, config.base_match, exclude)?;
    if group.is_empty() {
        warn!("no fragments found for base {base_name:?}; writing empty output");
    }

    let written = write_group(directory, &output, &group)?;
    info!(
        "stitched {written} fragments of {base_name:?} into {}",
        output.display()
    );
    Ok(written)
}

/// Write every fragment of `group` into `output`, in order.
fn write_group(
    directory: &Path,
    output: &Path,
    group: &FragmentGroup,
) -> Result<usize, StitchError> {
    let write_error = |source| StitchError::OutputWriteError {
        path: output.to_path_buf(),
        source,
    };

    // Resolved before truncation; an output spelled through `..` or a symlink
    // may still name one of the fragments.
    let output_identity = fs::canonicalize(output).ok();

    let mut writer = BufWriter::new(File::create(output).map_err(write_error)?);
    let mut buffer = vec![0_u8; COPY_BUFFER_SIZE];
    let mut written = 0;

    for fragment in group.fragments() {
        let path = directory.join(fragment.file_name());
        if output_identity.is_some() && fs::canonicalize(&path).ok() == output_identity {
            debug!("skipping {} because it is the output file", path.display());
            continue;
        }
        let bytes = append_fragment(&path, output, &mut writer, &mut buffer)?;
        debug!(
            "appended {bytes} bytes from {} (sequence {})",
            path.display(),
            fragment.sequence()
        );
        written += 1;
    }

    writer.flush().map_err(write_error)?;
    Ok(written)
}

fn append_fragment(
    path: &Path,
    output: &Path,
    writer: &mut impl Write,
    buffer: &mut [u8],
) -> Result<u64, StitchError> {
    let read_error = |source| StitchError::FragmentReadError {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = File::open(path).map_err(read_error)?;
    let mut total = 0_u64;
    loop {
        let read = match reader.read(buffer) {
            Ok(0) => return Ok(total),
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(read_error(err)),
        };
        writer
            .write_all(&buffer[..read])
            .map_err(|source| StitchError::OutputWriteError {
                path: output.to_path_buf(),
                source,
            })?;
        total += read as u64;
    }
}

/// Resolve where `stitch_group` writes `output_path` for `directory`.
#[must_use]
pub fn resolve_output(directory: &Path, output_path: &Path) -> PathBuf {
    directory.join(output_path)
}

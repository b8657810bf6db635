//! Directory scanning and base-name discovery.
//!
//! Listing is non-recursive and only reports regular files. The order of the
//! returned names follows the platform's directory listing; callers must not
//! rely on it for anything beyond completeness.

use std::{collections::BTreeSet, fs, path::Path};

use log::debug;

use crate::{error::StitchError, fragment::base_name_of};

/// List the names of regular files directly inside `directory`.
///
/// Symlinks are followed: a link to a regular file is listed and a link to a
/// directory is not. Dangling links are listed so that stitching them fails.
/// Entries whose names are not valid UTF-8 cannot follow the fragment naming
/// convention and are skipped.
///
/// # Errors
///
/// Returns [`StitchError::DirectoryNotFound`] if the directory does not exist
/// or cannot be read.
pub fn list_entries(directory: &Path) -> Result<Vec<String>, StitchError> {
    let not_found = |source| StitchError::DirectoryNotFound {
        path: directory.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(directory).map_err(not_found)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry in {}: {err}", directory.display());
                continue;
            }
        };
        // `fs::metadata` follows symlinks, so a linked fragment counts as a file.
        match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => continue,
            // Kept so opening the broken link fails loudly instead of a part
            // going missing from its group.
            Err(_) if entry.file_type().is_ok_and(|kind| kind.is_symlink()) => {}
            Err(err) => {
                debug!("skipping entry {:?}: {err}", entry.path());
                continue;
            }
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!("skipping non UTF-8 entry {raw:?}"),
        }
    }
    Ok(names)
}

/// Collect the distinct base names present in `entries`.
///
/// Entries without the `.part` marker are ignored, as are entries whose base
/// name would be empty (for example `.part0`).
///
/// # Examples
///
/// ```
/// use partstitch::discovery::discover_groups;
/// let entries = ["a.part0", "a.part1", "b.part0", "readme.md"].map(String::from);
/// let groups = discover_groups(&entries);
/// assert_eq!(groups.into_iter().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[must_use]
pub fn discover_groups(entries: &[String]) -> BTreeSet<String> {
    entries
        .iter()
        .filter_map(|name| base_name_of(name))
        .filter(|base| !base.is_empty())
        .map(str::to_owned)
        .collect()
}

/// List `directory` and return its distinct base names.
///
/// # Errors
///
/// Returns [`StitchError::DirectoryNotFound`] if the directory cannot be
/// listed.
pub fn discover_groups_in(directory: &Path) -> Result<BTreeSet<String>, StitchError> {
    let entries = list_entries(directory)?;
    Ok(discover_groups(&entries))
}

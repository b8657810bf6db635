//! Splitting a file into `<name>.part<N>` fragments.
//!
//! [`split_file`] is the inverse of stitching: it writes consecutive chunks of
//! at most `part_size` bytes, numbered from zero, so stitching the resulting
//! group reproduces the input byte for byte.

use std::{
    fs::File,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{config::SplitConfig, error::SplitError, fragment::PART_MARKER};

/// Split `input` into fragments written to `directory`.
///
/// Fragments are named after the input's file name, so the base name to
/// stitch them back is that file name. An empty input produces a single empty
/// `part0`. Returns the paths written, in sequence order.
///
/// # Errors
///
/// Returns [`SplitError::InvalidInputName`] if `input` has no UTF-8 file
/// name, [`SplitError::InputReadError`] if it cannot be opened or read, and
/// [`SplitError::PartWriteError`] if a fragment cannot be written.
pub fn split_file(
    input: &Path,
    directory: &Path,
    config: &SplitConfig,
) -> Result<Vec<PathBuf>, SplitError> {
    let base_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| SplitError::InvalidInputName {
            path: input.to_path_buf(),
        })?;
    let read_error = |source| SplitError::InputReadError {
        path: input.to_path_buf(),
        source,
    };

    let mut reader = File::open(input).map_err(read_error)?;
    let mut buffer = vec![0_u8; config.part_size.get()];
    let mut parts = Vec::new();

    loop {
        let filled = fill_chunk(&mut reader, &mut buffer).map_err(read_error)?;
        if filled == 0 && !parts.is_empty() {
            break;
        }
        let path = directory.join(format!("{base_name}{PART_MARKER}{}", parts.len()));
        write_part(&path, &buffer[..filled])?;
        debug!("wrote {filled} bytes to {}", path.display());
        parts.push(path);
        if filled < buffer.len() {
            break;
        }
    }

    info!(
        "split {} into {} fragments in {}",
        input.display(),
        parts.len(),
        directory.display()
    );
    Ok(parts)
}

fn write_part(path: &Path, bytes: &[u8]) -> Result<(), SplitError> {
    let write_error = |source| SplitError::PartWriteError {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)
}

/// Read until `buffer` is full or the reader is exhausted.
fn fill_chunk(reader: &mut impl Read, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::fill_chunk;

    #[test]
    fn fill_chunk_stops_at_end_of_input() {
        let mut reader = Cursor::new(vec![1_u8, 2, 3]);
        let mut buffer = [0_u8; 8];
        assert_eq!(fill_chunk(&mut reader, &mut buffer).expect("read"), 3);
        assert_eq!(&buffer[..3], &[1, 2, 3]);
        assert_eq!(fill_chunk(&mut reader, &mut buffer).expect("read"), 0);
    }

    #[test]
    fn fill_chunk_fills_whole_buffer() {
        let mut reader = Cursor::new(vec![7_u8; 10]);
        let mut buffer = [0_u8; 4];
        assert_eq!(fill_chunk(&mut reader, &mut buffer).expect("read"), 4);
        assert_eq!(fill_chunk(&mut reader, &mut buffer).expect("read"), 4);
        assert_eq!(fill_chunk(&mut reader, &mut buffer).expect("read"), 2);
    }
}

//! Command line interface for the `partstitch` binary.
//!
//! Shared with `build.rs`, which renders the man page from this definition,
//! so the module depends on nothing but `clap` and `std`.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

/// Command line arguments for the `partstitch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "partstitch",
    version,
    about = "Stitch `<name>.part<N>` fragments back into whole files"
)]
pub struct Cli {
    /// Directory where the file parts are stored.
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Name of the output file; used only with `--base-filename`.
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Base filename of the parts to stitch; stitches every group when omitted.
    #[arg(short, long)]
    pub base_filename: Option<String>,

    /// Select parts whose names merely start with the base filename.
    #[arg(long)]
    pub prefix_match: bool,

    /// Split this file into parts inside `--directory` instead of stitching.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["base_filename", "output_file"])]
    pub split: Option<PathBuf>,

    /// Maximum size of each part written by `--split`, in bytes.
    #[arg(long, value_name = "BYTES", requires = "split")]
    pub part_size: Option<NonZeroUsize>,
}

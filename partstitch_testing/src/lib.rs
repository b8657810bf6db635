//! Shared fixtures for `partstitch` integration tests.
//!
//! [`FragmentDir`] wraps a temporary directory with helpers for writing
//! fragments and reading outputs; [`LoggerHandle`] serialises access to the
//! global `log` capture.
//!
//! ```rust
//! use partstitch_testing::FragmentDir;
//!
//! let dir = FragmentDir::new();
//! dir.write_part("doc", 0, b"Hello, ");
//! assert_eq!(dir.read("doc.part0"), b"Hello, ");
//! ```

pub mod fragments;
pub mod logging;

pub use fragments::{FragmentDir, fragment_dir};
pub use logging::{LoggerHandle, logger};

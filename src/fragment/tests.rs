//! Unit tests for fragment naming and ordering.
//!
//! Tests are split into focused submodules to keep each file short and easy
//! to navigate.

mod group_tests;
mod sequence_tests;

//! Tests for the log records emitted while stitching.

use std::path::Path;

use log::Level;
use partstitch::{StitchConfig, stitch_all};
use partstitch_testing::{FragmentDir, LoggerHandle, fragment_dir, logger};
use rstest::rstest;
use serial_test::serial;

#[rstest]
#[serial(stitch_logs)]
fn completed_group_is_logged(fragment_dir: FragmentDir, mut logger: LoggerHandle) {
    fragment_dir.write_part("doc", 0, b"Hello, ");
    fragment_dir.write_part("doc", 1, b"World!");
    logger.clear();

    stitch_all(
        fragment_dir.path(),
        Some("doc"),
        Some(Path::new("doc_full.txt")),
        &StitchConfig::default(),
    )
    .expect("stitch");

    let messages = logger.drain_messages();
    assert!(
        messages.iter().any(|(level, message)| *level == Level::Info
            && message.contains("stitched 2 fragments of \"doc\"")),
        "completion log not found: {messages:?}"
    );
}

#[rstest]
#[serial(stitch_logs)]
fn failed_group_is_logged_as_warning(fragment_dir: FragmentDir, mut logger: LoggerHandle) {
    fragment_dir.write_file("bad.partX", b"junk");
    logger.clear();

    let report =
        stitch_all(fragment_dir.path(), None, None, &StitchConfig::default()).expect("batch");
    assert!(report.has_failures());

    let messages = logger.drain_messages();
    assert!(
        messages.iter().any(|(level, message)| *level == Level::Warn
            && message.contains("failed to stitch group \"bad\"")),
        "failure log not found: {messages:?}"
    );
}

#[rstest]
#[serial(stitch_logs)]
fn empty_group_is_logged_as_warning(fragment_dir: FragmentDir, mut logger: LoggerHandle) {
    logger.clear();

    stitch_all(
        fragment_dir.path(),
        Some("ghost"),
        Some(Path::new("ghost.out")),
        &StitchConfig::default(),
    )
    .expect("stitch");

    let messages = logger.drain_messages();
    assert!(
        messages
            .iter()
            .any(|(level, message)| *level == Level::Warn && message.contains("no fragments")),
        "empty group warning not found: {messages:?}"
    );
}

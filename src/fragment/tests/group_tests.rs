//! Tests for selecting and ordering a fragment group from a listing.

use proptest::prelude::*;

use crate::{
    error::StitchError,
    fragment::{BaseMatch, FragmentGroup},
};

fn entries(names: &[&str]) -> Vec<String> { names.iter().map(|&name| name.to_owned()).collect() }

fn selected_names(group: &FragmentGroup) -> Vec<&str> {
    group.fragments().iter().map(|f| f.file_name()).collect()
}

#[test]
fn select_sorts_numerically() {
    let listing = entries(&["x.part10", "x.part1", "x.part2", "x.part0"]);
    let group = FragmentGroup::select("x", &listing, BaseMatch::Exact, None).expect("select");
    assert_eq!(
        selected_names(&group),
        ["x.part0", "x.part1", "x.part2", "x.part10"]
    );
    assert_eq!(group.base_name(), "x");
    assert_eq!(group.len(), 4);
}

#[test]
fn select_ignores_unrelated_entries() {
    let listing = entries(&["x.part0", "y.part0", "x.txt", "notes"]);
    let group = FragmentGroup::select("x", &listing, BaseMatch::Exact, None).expect("select");
    assert_eq!(selected_names(&group), ["x.part0"]);
}

#[test]
fn select_allows_gaps_and_non_zero_start() {
    let listing = entries(&["x.part9", "x.part3", "x.part5"]);
    let group = FragmentGroup::select("x", &listing, BaseMatch::Exact, None).expect("select");
    assert_eq!(selected_names(&group), ["x.part3", "x.part5", "x.part9"]);
}

#[test]
fn select_keeps_listing_order_for_ties() {
    let listing = entries(&["x.part01", "x.part1", "x.part0"]);
    let group = FragmentGroup::select("x", &listing, BaseMatch::Exact, None).expect("select");
    assert_eq!(selected_names(&group), ["x.part0", "x.part01", "x.part1"]);
}

#[test]
fn select_skips_excluded_entry() {
    let listing = entries(&["x.part0", "x.part1"]);
    let group =
        FragmentGroup::select("x", &listing, BaseMatch::Exact, Some("x.part1")).expect("select");
    assert_eq!(selected_names(&group), ["x.part0"]);
}

#[test]
fn select_without_matches_is_empty() {
    let listing = entries(&["y.part0"]);
    let group = FragmentGroup::select("x", &listing, BaseMatch::Exact, None).expect("select");
    assert!(group.is_empty());
}

#[test]
fn select_rejects_empty_base() {
    let err = FragmentGroup::select("", &[], BaseMatch::Exact, None).expect_err("empty base");
    assert!(matches!(err, StitchError::InvalidBaseName));
}

#[test]
fn select_fails_on_malformed_suffix() {
    let listing = entries(&["x.part0", "x.partX"]);
    let err = FragmentGroup::select("x", &listing, BaseMatch::Exact, None)
        .expect_err("malformed suffix");
    assert!(matches!(err, StitchError::MalformedFragmentName { ref name } if name == "x.partX"));
}

#[test]
fn prefix_policy_claims_sibling_groups() {
    let listing = entries(&["file.part0", "file2.part0", "file.part1"]);

    let exact = FragmentGroup::select("file", &listing, BaseMatch::Exact, None).expect("select");
    assert_eq!(selected_names(&exact), ["file.part0", "file.part1"]);

    let prefix = FragmentGroup::select("file", &listing, BaseMatch::Prefix, None).expect("select");
    assert_eq!(
        selected_names(&prefix),
        ["file.part0", "file2.part0", "file.part1"]
    );
}

proptest! {
    #[test]
    fn select_order_is_independent_of_listing_order(
        order in Just((0_u32..20).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let listing: Vec<String> = order.iter().map(|n| format!("f.part{n}")).collect();
        let group = FragmentGroup::select("f", &listing, BaseMatch::Exact, None).expect("select");
        let expected: Vec<String> = (0_u32..20).map(|n| format!("f.part{n}")).collect();
        prop_assert_eq!(selected_names(&group), expected);
    }
}

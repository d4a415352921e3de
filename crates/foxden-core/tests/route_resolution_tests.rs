//! Route table resolution properties
//!
//! The table must resolve each of the five defined paths to its own
//! distinct view (bijective) and resolve nothing else.

use std::collections::HashSet;

use foxden_core::{RoutePath, RouteTable, ViewId};
use proptest::prelude::*;

mod common;

#[test]
fn test_five_paths_resolve_to_five_distinct_views() {
    let table = common::table();

    let resolved: Vec<ViewId> = table
        .routes()
        .iter()
        .map(|route| table.resolve(&route.path).expect("route path must resolve"))
        .collect();

    let distinct: HashSet<ViewId> = resolved.iter().copied().collect();
    assert_eq!(resolved.len(), 5);
    assert_eq!(distinct.len(), 5);
}

#[test]
fn test_expected_pairings() {
    let table = common::table();
    let cases = [
        ("/", ViewId::Home),
        ("/menu", ViewId::Menu),
        ("/bbq", ViewId::Bbq),
        ("/lunch", ViewId::Lunch),
        ("/contacts", ViewId::Contacts),
    ];

    for (raw, expected) in cases {
        let path = RoutePath::parse(raw).expect("defined path should parse");
        assert_eq!(table.resolve(&path), Some(expected), "wrong view for {}", raw);
    }
}

#[test]
fn test_normalized_variants_resolve_like_canonical() {
    let table = common::table();

    let trailing = RoutePath::parse("/menu/").unwrap();
    assert_eq!(table.resolve(&trailing), Some(ViewId::Menu));

    let with_query = RoutePath::parse("/bbq?utm=mailing").unwrap();
    assert_eq!(table.resolve(&with_query), Some(ViewId::Bbq));
}

proptest! {
    /// Unknown single-segment paths never resolve
    #[test]
    fn unknown_segments_resolve_to_none(segment in "[a-z]{1,16}") {
        let known = ["menu", "bbq", "lunch", "contacts"];
        prop_assume!(!known.contains(&segment.as_str()));

        let table = RouteTable::site_default();
        let path = RoutePath::parse(&format!("/{}", segment)).unwrap();
        prop_assert_eq!(table.resolve(&path), None);
    }

    /// Parsing plus resolution never panics, whatever the input
    #[test]
    fn resolution_is_total(raw in ".{0,64}") {
        let table = RouteTable::site_default();
        if let Ok(path) = RoutePath::parse(&raw) {
            let _ = table.resolve(&path);
        }
    }
}

//! Integration tests for catalog loading and the query-filter laws

use pokedex_core::{valid_types, Catalog, CatalogQuery, Pokemon};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn loads_a_dataset_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"pokemon": [
            {{"name": "Bulbasaur", "type": ["Grass", "Poison"]}},
            {{"name": "Charmander", "type": ["Fire"]}}
        ]}}"#
    )
    .unwrap();

    let catalog = Catalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0].name, "Bulbasaur");
}

#[test]
fn rejects_a_dataset_with_an_invalid_tag_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"pokemon": [{{"name": "MissingNo", "type": ["Glitch"]}}]}}"#
    )
    .unwrap();

    assert!(Catalog::from_path(file.path()).is_err());
}

#[test]
fn missing_dataset_file_is_an_io_error() {
    assert!(matches!(
        Catalog::from_path("/nonexistent/pokedex.json").unwrap_err(),
        pokedex_core::PokedexError::Io(_)
    ));
}

#[test]
fn builtin_dataset_only_uses_known_tags() {
    let catalog = Catalog::builtin().unwrap();
    for entry in catalog.entries() {
        assert!(!entry.name.is_empty());
        for tag in &entry.types {
            assert!(valid_types().contains(&tag.as_str()), "unknown tag {tag}");
        }
    }
}

// The canonical two-entry scenario, end to end through the public API.
#[test]
fn canonical_filter_scenario() {
    let catalog = Catalog::from_entries(vec![
        Pokemon::new("Bulbasaur", ["Grass", "Poison"]),
        Pokemon::new("Charmander", ["Fire"]),
    ])
    .unwrap();

    let by_name = catalog.query(&CatalogQuery::unfiltered().with_name("char"));
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Charmander");

    let by_type = catalog.query(&CatalogQuery::unfiltered().with_type("Poison"));
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].name, "Bulbasaur");

    let combined = catalog.query(&CatalogQuery::unfiltered().with_name("a").with_type("Fire"));
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].name, "Charmander");

    let all = catalog.query(&CatalogQuery::unfiltered());
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Bulbasaur");
    assert_eq!(all[1].name, "Charmander");
}

fn entry_strategy() -> impl Strategy<Value = Pokemon> {
    (
        "[A-Za-z]{1,12}",
        prop::sample::subsequence(valid_types().to_vec(), 0..=3),
    )
        .prop_map(|(name, types)| Pokemon::new(name, types))
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Pokemon>> {
    prop::collection::vec(entry_strategy(), 0..24)
}

/// True when `needle` appears within `haystack` as a subsequence of equal
/// elements in order.
fn is_ordered_subsequence(needle: &[Pokemon], haystack: &[Pokemon]) -> bool {
    let mut remaining = haystack.iter();
    needle
        .iter()
        .all(|wanted| remaining.any(|entry| entry == wanted))
}

proptest! {
    // An entry is in the result of a name-filtered query iff the lowered
    // filter is a substring of its lowered name.
    #[test]
    fn name_filter_obeys_the_substring_law(
        entries in catalog_strategy(),
        needle in "[A-Za-z]{0,4}",
    ) {
        let catalog = Catalog::from_entries(entries.clone()).unwrap();
        let results = catalog.query(&CatalogQuery::unfiltered().with_name(needle.clone()));

        let lowered = needle.to_lowercase();
        let expected: Vec<Pokemon> = entries
            .into_iter()
            .filter(|entry| entry.name.to_lowercase().contains(&lowered))
            .collect();

        prop_assert_eq!(results, expected);
    }

    // An entry is in the result of a type-filtered query iff the filter is
    // exactly one of its tags.
    #[test]
    fn type_filter_obeys_the_membership_law(
        entries in catalog_strategy(),
        tag in prop::sample::select(valid_types().to_vec()),
    ) {
        let catalog = Catalog::from_entries(entries.clone()).unwrap();
        let results = catalog.query(&CatalogQuery::unfiltered().with_type(tag));

        let expected: Vec<Pokemon> = entries
            .into_iter()
            .filter(|entry| entry.types.iter().any(|t| t == tag))
            .collect();

        prop_assert_eq!(results, expected);
    }

    // Combined filters return exactly the entries satisfying both.
    #[test]
    fn combined_filters_are_conjunctive(
        entries in catalog_strategy(),
        needle in "[A-Za-z]{0,4}",
        tag in prop::sample::select(valid_types().to_vec()),
    ) {
        let catalog = Catalog::from_entries(entries.clone()).unwrap();
        let results = catalog.query(
            &CatalogQuery::unfiltered().with_name(needle.clone()).with_type(tag),
        );

        let lowered = needle.to_lowercase();
        let expected: Vec<Pokemon> = entries
            .into_iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&lowered)
                    && entry.types.iter().any(|t| t == tag)
            })
            .collect();

        prop_assert_eq!(results, expected);
    }

    // Results are always an ordered subsequence of the source list, and
    // re-running the query yields the same answer.
    #[test]
    fn queries_are_stable_and_idempotent(
        entries in catalog_strategy(),
        needle in "[A-Za-z]{0,4}",
    ) {
        let catalog = Catalog::from_entries(entries.clone()).unwrap();
        let query = CatalogQuery::unfiltered().with_name(needle);

        let first = catalog.query(&query);
        let second = catalog.query(&query);

        prop_assert!(is_ordered_subsequence(&first, catalog.entries()));
        prop_assert_eq!(first, second);
    }
}

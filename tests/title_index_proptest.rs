//! Property-based tests for the title index.
//! Invariants must hold for every insertion order, not just the fixed examples.

use std::cmp::Ordering;

use movie_rental::{compare_titles, InsertOutcome, TitleIndex};
use proptest::prelude::*;

fn build(titles: &[String]) -> (TitleIndex, Vec<InsertOutcome>) {
    let mut index = TitleIndex::new();
    let outcomes = titles
        .iter()
        .enumerate()
        .map(|(year, title)| index.insert(title.as_str(), "Genre", year as i32 + 1))
        .collect();
    (index, outcomes)
}

proptest! {
    /// Enumeration is strictly ascending under case-insensitive comparison.
    #[test]
    fn enumeration_is_sorted(titles in prop::collection::vec("[a-zA-Z_ ]{0,6}", 0..60)) {
        let (index, _) = build(&titles);
        let listed: Vec<&str> = index.iter().map(|m| m.title.as_str()).collect();
        for pair in listed.windows(2) {
            prop_assert_eq!(compare_titles(pair[0], pair[1]), Ordering::Less);
        }
        prop_assert_eq!(listed.len(), index.len());
    }

    /// Each insert grows the index by one on success and zero on rejection,
    /// and rejections name the stored title.
    #[test]
    fn duplicates_never_grow_the_index(titles in prop::collection::vec("[a-cA-C]{1,3}", 1..40)) {
        let mut index = TitleIndex::new();
        for title in &titles {
            let before = index.len();
            let existing = index.lookup(title).map(|m| m.title.clone());
            match index.insert(title.as_str(), "Genre", 1) {
                InsertOutcome::Inserted => {
                    prop_assert!(existing.is_none());
                    prop_assert_eq!(index.len(), before + 1);
                }
                InsertOutcome::DuplicateRejected(stored) => {
                    prop_assert_eq!(Some(stored), existing);
                    prop_assert_eq!(index.len(), before);
                }
            }
        }
    }

    /// Every inserted movie is found again under any casing of its title.
    #[test]
    fn inserted_titles_round_trip(titles in prop::collection::vec("[a-zA-Z]{1,8}", 1..40)) {
        let (index, outcomes) = build(&titles);
        for ((title, outcome), year) in titles.iter().zip(&outcomes).zip(1..) {
            if outcome.is_inserted() {
                let expected = (title.as_str(), "Genre", year);
                for variant in [title.clone(), title.to_uppercase(), title.to_lowercase()] {
                    let found = index
                        .lookup(&variant)
                        .map(|m| (m.title.as_str(), m.genre.as_str(), m.year));
                    prop_assert_eq!(found, Some(expected));
                }
            }
        }
    }

    /// Reads are repeatable without intervening inserts.
    #[test]
    fn reads_are_idempotent(titles in prop::collection::vec("[a-z]{1,4}", 0..30), probe in "[a-z]{1,4}") {
        let (index, _) = build(&titles);
        let first: Vec<_> = index.iter().cloned().collect();
        let second: Vec<_> = index.iter().cloned().collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(index.lookup(&probe), index.lookup(&probe));
    }
}

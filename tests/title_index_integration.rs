use movie_rental::{compare_titles, InsertOutcome, Movie, MovieDraft, TitleIndex};
use std::cmp::Ordering;

fn titles(index: &TitleIndex) -> Vec<String> {
    index.iter().map(|movie| movie.title.clone()).collect()
}

#[test]
fn rental_catalog_walkthrough() {
    let mut index = TitleIndex::new();

    assert_eq!(index.insert("Inception", "Sci-Fi", 2010), InsertOutcome::Inserted);
    assert_eq!(index.insert("amelie", "Romance", 2001), InsertOutcome::Inserted);
    assert_eq!(index.insert("Zodiac", "Thriller", 2007), InsertOutcome::Inserted);

    assert_eq!(titles(&index), ["amelie", "Inception", "Zodiac"]);

    assert_eq!(
        index.insert("INCEPTION", "X", 1),
        InsertOutcome::DuplicateRejected("Inception".to_string())
    );
    assert_eq!(
        index.lookup("inception"),
        Some(&Movie::new("Inception", "Sci-Fi", 2010))
    );
    assert!(index.lookup("Memento").is_none());
    assert_eq!(index.len(), 3);
}

#[test]
fn empty_index_reads() {
    let index = TitleIndex::default();
    assert!(index.is_empty());
    assert!(index.lookup("").is_none());
    assert!(index.lookup("Anything").is_none());
    assert_eq!(index.iter().count(), 0);
    assert_eq!((&index).into_iter().count(), 0);
}

#[test]
fn listing_uses_display_format() {
    let mut index = TitleIndex::new();
    let _ = index.insert_movie(MovieDraft::parse("Heat", "Crime", "1995").unwrap());
    let _ = index.insert_movie(MovieDraft::parse("Alien", "Horror", "1979").unwrap());

    let lines: Vec<String> = index.iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["Alien (Horror, 1979)", "Heat (Crime, 1995)"]);
}

#[test]
fn reads_do_not_disturb_each_other() {
    let mut index = TitleIndex::new();
    for title in ["Memento", "Brazil", "Yojimbo", "Casablanca", "Rashomon"] {
        let _ = index.insert(title, "Classic", 1950);
    }

    let first = titles(&index);
    let mut partial = index.iter();
    partial.next();
    assert_eq!(titles(&index), first);
    assert_eq!(index.lookup("brazil"), index.lookup("BRAZIL"));
    assert_eq!(partial.count(), first.len() - 1);
}

#[test]
fn ordering_is_case_insensitive_then_ordinal() {
    let mut index = TitleIndex::new();
    for title in ["b", "A", "a_", "C", "aa"] {
        let _ = index.insert(title, "Test", 1);
    }
    let listed = titles(&index);
    assert_eq!(listed, ["A", "aa", "a_", "b", "C"]);
    assert!(listed
        .windows(2)
        .all(|pair| compare_titles(&pair[0], &pair[1]) == Ordering::Less));
}

use std::cmp::Ordering;

/// Order two titles ordinally after folding case.
///
/// Each char is replaced by its uppercase form when that form is a single
/// char; chars whose uppercase expands (`ß` -> `SS`) are compared as-is so
/// every title maps to exactly as many chars as it has.
///
/// Folded chars compare by Unicode scalar value, the same order `str` uses.
/// UTF-16 code-unit order differs only between supplementary-plane chars
/// (U+10000 and up) and BMP chars in U+E000..=U+FFFF: here the BMP char
/// always sorts first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

/// Whether two titles collide as index keys.
pub fn titles_equal(a: &str, b: &str) -> bool {
    compare_titles(a, b) == Ordering::Equal
}

fn fold(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_ascii_case() {
        assert_eq!(compare_titles("Matrix", "matrix"), Ordering::Equal);
        assert!(titles_equal("INCEPTION", "inception"));
    }

    #[test]
    fn orders_ordinally_after_folding() {
        assert_eq!(compare_titles("amelie", "Inception"), Ordering::Less);
        assert_eq!(compare_titles("Zodiac", "inception"), Ordering::Greater);
        // '_' sits between the upper and lower ASCII letters, so folding to
        // uppercase puts it after every letter.
        assert_eq!(compare_titles("a_b", "aZb"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_titles("Alien", "Aliens"), Ordering::Less);
        assert_eq!(compare_titles("", "A"), Ordering::Less);
    }

    #[test]
    fn orders_by_scalar_value_across_planes() {
        // U+FFFD precedes U+10000 by scalar value, although its UTF-16 code
        // unit is greater than the lead surrogate of U+10000.
        assert_eq!(compare_titles("\u{FFFD}", "\u{10000}"), Ordering::Less);
        assert_eq!(compare_titles("\u{E000}", "\u{1F600}"), Ordering::Less);
    }

    #[test]
    fn folds_non_ascii_letters() {
        assert!(titles_equal("Ámélie", "ÁMÉLIE"));
        assert!(!titles_equal("straße", "STRASSE"));
    }
}

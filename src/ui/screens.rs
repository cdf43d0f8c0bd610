use crate::index::{titles_equal, TitleIndex};
use crate::models::Movie;

/// Selection state for the alphabetical movie list. The list itself is never
/// copied; rows are read straight from the index on every frame.
#[derive(Default)]
pub(crate) struct CatalogScreen {
    pub(crate) selected: usize,
}

impl CatalogScreen {
    pub(crate) fn current_movie<'a>(&self, index: &'a TitleIndex) -> Option<&'a Movie> {
        index.iter().nth(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len as isize - 1;
        let new = (self.selected as isize + offset).clamp(0, last);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Move the selection onto `title`, wherever it now sorts.
    pub(crate) fn select_title(&mut self, index: &TitleIndex, title: &str) {
        if let Some(position) = index
            .iter()
            .position(|movie| titles_equal(&movie.title, title))
        {
            self.selected = position;
        }
    }
}

/// Detail view for one movie found by search or picked from the list.
pub(crate) struct DetailsScreen {
    pub(crate) movie: Movie,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> TitleIndex {
        let mut index = TitleIndex::new();
        for title in ["Heat", "Alien", "Zodiac"] {
            let _ = index.insert(title, "Genre", 1990);
        }
        index
    }

    #[test]
    fn selection_clamps_to_list() {
        let mut screen = CatalogScreen::default();
        screen.move_selection(-3, 3);
        assert_eq!(screen.selected, 0);
        screen.move_selection(10, 3);
        assert_eq!(screen.selected, 2);
        screen.move_selection(1, 0);
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn select_title_follows_sort_position() {
        let index = sample_index();
        let mut screen = CatalogScreen::default();
        screen.select_title(&index, "zodiac");
        assert_eq!(screen.selected, 2);
        assert_eq!(
            screen.current_movie(&index).map(|m| m.title.as_str()),
            Some("Zodiac")
        );
        screen.select_title(&index, "Memento");
        assert_eq!(screen.selected, 2);
    }

    #[test]
    fn first_and_last() {
        let mut screen = CatalogScreen::default();
        screen.select_last(3);
        assert_eq!(screen.selected, 2);
        screen.select_first();
        assert_eq!(screen.selected, 0);
        screen.select_last(0);
        assert_eq!(screen.selected, 0);
    }
}

use std::iter::FusedIterator;

use super::node::Node;
use crate::models::Movie;

/// Lazy in-order walk over a [`super::TitleIndex`].
///
/// Holds the chain of ancestors whose movie has not been yielded yet. The
/// stack never grows past the tree depth and lives only as long as the
/// iterator, so traversals never share state.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Movie;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.movie)
    }
}

impl FusedIterator for InOrder<'_> {}

#[cfg(test)]
mod tests {
    use crate::index::TitleIndex;

    #[test]
    fn yields_lazily() {
        let mut index = TitleIndex::new();
        for title in ["Memento", "Alien", "Zodiac", "Heat"] {
            let _ = index.insert(title, "Genre", 2000);
        }
        let mut walk = index.iter();
        assert_eq!(walk.next().map(|m| m.title.as_str()), Some("Alien"));
        assert_eq!(walk.next().map(|m| m.title.as_str()), Some("Heat"));

        // A second walk starts over regardless of the first one's position.
        let restart: Vec<_> = index.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(restart, ["Alien", "Heat", "Memento", "Zodiac"]);

        assert_eq!(walk.next().map(|m| m.title.as_str()), Some("Memento"));
        assert_eq!(walk.next().map(|m| m.title.as_str()), Some("Zodiac"));
        assert!(walk.next().is_none());
        assert!(walk.next().is_none());
    }
}

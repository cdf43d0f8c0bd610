use std::cmp::Ordering;

use tracing::debug;

use super::compare::compare_titles;
use super::iter::InOrder;
use super::node::{Link, Node};
use crate::models::Movie;

/// Result of an insertion attempt.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The movie was attached as a new leaf.
    Inserted,
    /// A movie with a case-insensitively equal title already exists. Carries
    /// the stored title, which may differ in case from the rejected one.
    DuplicateRejected(String),
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// Binary search tree of movies keyed by case-insensitive title.
///
/// Every title in a node's left subtree compares less than the node's title
/// and every title in its right subtree compares greater, so no two nodes
/// share a key. The tree is never rebalanced: its shape follows insertion
/// order and a sorted insertion sequence degrades it to a list. Insert,
/// lookup, enumeration and drop all walk the tree with loops or an explicit
/// heap stack rather than recursion, so tree depth does not translate into
/// call-stack depth.
#[derive(Default)]
pub struct TitleIndex {
    root: Link,
    len: usize,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a movie built from its three fields.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> InsertOutcome {
        self.insert_movie(Movie::new(title, genre, year))
    }

    /// Attach `movie` at the empty slot its title leads to, or leave the tree
    /// untouched when the title is already taken.
    pub fn insert_movie(&mut self, movie: Movie) -> InsertOutcome {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match compare_titles(&movie.title, &node.movie.title) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    debug!(
                        title = %movie.title,
                        existing = %node.movie.title,
                        "rejected duplicate title"
                    );
                    return InsertOutcome::DuplicateRejected(node.movie.title.clone());
                }
            };
        }

        debug!(title = %movie.title, "inserted movie");
        *slot = Some(Node::leaf(movie));
        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Find the movie whose title equals `title` ignoring case.
    pub fn lookup(&self, title: &str) -> Option<&Movie> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match compare_titles(title, &node.movie.title) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.movie),
            };
        }
        None
    }

    /// Walk every movie in ascending title order. Each call starts a new,
    /// independent traversal.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path. Reported in the
    /// shutdown log as a measure of how unbalanced the tree became.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 1));
        }
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                pending.push((child, level + 1));
            }
        }
        deepest
    }
}

impl Drop for TitleIndex {
    // Unlink nodes one at a time; the default recursive drop would use one
    // stack frame per level of a degenerate tree.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a TitleIndex {
    type Item = &'a Movie;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

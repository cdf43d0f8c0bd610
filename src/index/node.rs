use crate::models::Movie;

/// Owning link to a child subtree. `None` marks an empty slot.
pub(super) type Link = Option<Box<Node>>;

/// One movie plus its two exclusively owned subtrees.
pub(super) struct Node {
    pub(super) movie: Movie,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    pub(super) fn leaf(movie: Movie) -> Box<Self> {
        Box::new(Self {
            movie,
            left: None,
            right: None,
        })
    }
}

use super::state::StateId;

/// A compact representation of the outgoing edges of a state that doesn't
/// allocate until there are at least three edges.
///
/// Edges are kept sorted by character in every variant, so iteration order is
/// deterministic and the `Many` case can use binary search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EdgeSet {
    /// No outgoing edges.
    None,
    /// Exactly one edge (letter, target).
    One((char, StateId)),
    /// Exactly two edges, sorted (letter1, target1, letter2, target2).
    Two((char, StateId, char, StateId)),
    /// Three or more edges stored in a sorted vector.
    Many(Vec<(char, StateId)>),
}

impl EdgeSet {
    /// Returns the state that letter's edge leads to, or None if no such edge exists.
    ///
    /// O(log k) in the number of outgoing edges.
    #[inline]
    pub fn get(&self, letter: char) -> Option<StateId> {
        match self {
            EdgeSet::None => None,
            EdgeSet::One((ch, target)) => (*ch == letter).then_some(*target),
            EdgeSet::Two((c1, t1, c2, t2)) => {
                if letter == *c1 {
                    Some(*t1)
                } else if letter == *c2 {
                    Some(*t2)
                } else {
                    None
                }
            }
            EdgeSet::Many(edges) => edges
                .binary_search_by_key(&letter, |&(ch, _)| ch)
                .ok()
                .map(|i| edges[i].1),
        }
    }

    /// Inserts an edge in sorted position.
    ///
    /// The letter must not already be present.
    pub fn insert(&mut self, letter: char, target: StateId) {
        debug_assert!(self.get(letter).is_none(), "insert: letter already exists");
        match self {
            EdgeSet::None => *self = EdgeSet::One((letter, target)),
            EdgeSet::One((c1, t1)) => {
                *self = if letter < *c1 {
                    EdgeSet::Two((letter, target, *c1, *t1))
                } else {
                    EdgeSet::Two((*c1, *t1, letter, target))
                };
            }
            EdgeSet::Two((c1, t1, c2, t2)) => {
                let mut edges = vec![(*c1, *t1), (*c2, *t2), (letter, target)];
                edges.sort_by_key(|&(ch, _)| ch);
                *self = EdgeSet::Many(edges);
            }
            EdgeSet::Many(edges) => {
                let pos = edges.partition_point(|&(ch, _)| ch < letter);
                edges.insert(pos, (letter, target));
            }
        }
    }

    /// Redirects the edge labeled `letter` to `new_target` in place.
    ///
    /// Panics if `letter` is not present.
    pub fn retarget(&mut self, letter: char, new_target: StateId) {
        match self {
            EdgeSet::None => panic!("retarget: letter not found"),
            EdgeSet::One((ch, target)) => {
                assert!(*ch == letter, "retarget: letter not found");
                *target = new_target;
            }
            EdgeSet::Two((c1, t1, c2, t2)) => {
                if *c1 == letter {
                    *t1 = new_target;
                } else if *c2 == letter {
                    *t2 = new_target;
                } else {
                    panic!("retarget: letter not found");
                }
            }
            EdgeSet::Many(edges) => {
                let pos = edges
                    .binary_search_by_key(&letter, |&(ch, _)| ch)
                    .unwrap_or_else(|_| panic!("retarget: letter not found"));
                edges[pos].1 = new_target;
            }
        }
    }

    /// Gets the edge at the specified index, in character order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn nth(&self, index: usize) -> Option<(char, StateId)> {
        match self {
            EdgeSet::None => None,
            EdgeSet::One(edge) => match index {
                0 => Some(*edge),
                _ => None,
            },
            EdgeSet::Two((c1, t1, c2, t2)) => match index {
                0 => Some((*c1, *t1)),
                1 => Some((*c2, *t2)),
                _ => None,
            },
            EdgeSet::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            EdgeSet::None => 0,
            EdgeSet::One(_) => 1,
            EdgeSet::Two(_) => 2,
            EdgeSet::Many(edges) => edges.len(),
        }
    }

    /// Returns an iterator over all edges in character order.
    #[inline]
    pub fn iter(&self) -> EdgeIter<'_> {
        EdgeIter {
            edges: self,
            index: Some(0),
        }
    }
}

/// An iterator over the edges of a state, in character order.
#[derive(Clone)]
pub(crate) struct EdgeIter<'a> {
    edges: &'a EdgeSet,
    index: Option<usize>,
}

impl Iterator for EdgeIter<'_> {
    type Item = (char, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        let next_edge = self.edges.nth(index);
        self.index = if next_edge.is_some() {
            index.checked_add(1)
        } else {
            None
        };
        next_edge
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.index {
            Some(i) => self.edges.len().saturating_sub(i),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EdgeIter<'_> {}

//! Approximate word search over the minimized graph.
//!
//! The search walks the graph recursively with three cursors: the current
//! state, the unconsumed suffix of the query, and the remaining edit budget.
//! Substitutions, deletions (a query character with no counterpart in the
//! word), and insertions (a word character with no counterpart in the query)
//! each consume one unit of budget. The walk never mutates the graph, so any
//! number of searches may run concurrently.

use smallvec::SmallVec;

use super::state::StateId;
use super::Dawg;

impl Dawg {
    /// Finds every word within `max_distance` edits of `query`.
    ///
    /// `max_distance` is the Levenshtein budget: each substitution, and, when
    /// the corresponding flag is set, each insertion (`allow_insert`, the
    /// found word has an extra character) or deletion (`allow_delete`, the
    /// query has an extra character) costs one. With `max_distance` of 0 this
    /// degenerates to an exact lookup returning at most the query itself.
    ///
    /// `max_results` caps the returned sequence; the search stops exploring
    /// once the cap is exceeded, and any excess is trimmed from the front, so
    /// this bounds work rather than guaranteeing the closest matches survive.
    /// A `max_results` of 0 means unbounded. Results are in discovery order;
    /// no ranking by distance is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzydawg::dawg::build_dawg;
    ///
    /// let dawg = build_dawg(["test", "rest", "nest", "note"]);
    /// let words = dawg.search("test", 1, 10, false, false);
    /// assert_eq!(words.len(), 3); // test, nest, rest
    /// ```
    pub fn search(
        &self,
        query: &str,
        max_distance: u32,
        max_results: usize,
        allow_insert: bool,
        allow_delete: bool,
    ) -> Vec<String> {
        let query: SmallVec<[char; 32]> = query.chars().collect();
        let walk = Walk {
            dawg: self,
            max_results,
            allow_insert,
            allow_delete,
        };
        let mut prefix = SmallVec::new();
        let mut found = Vec::new();
        walk.step(self.root, &mut prefix, &query, max_distance, None, &mut found);
        if max_results > 0 && found.len() > max_results {
            found.drain(..found.len() - max_results);
        }
        found
    }
}

/// The query-independent parameters of one search.
struct Walk<'a> {
    dawg: &'a Dawg,
    max_results: usize,
    allow_insert: bool,
    allow_delete: bool,
}

impl Walk<'_> {
    /// True once enough results have been found to stop every branch.
    #[inline]
    fn over_cap(&self, found: &[String]) -> bool {
        self.max_results > 0 && found.len() > self.max_results
    }

    /// One recursion step.
    ///
    /// `prefix` is the path spelled so far, grown and shrunk around each
    /// recursive call. `rest` is the unconsumed query suffix. `ignore` is the
    /// character substituted away by the caller: following it again here
    /// would undo that substitution and revisit the same pair forever, so
    /// both the exact step and the edit loops skip it. It resets as soon as
    /// the query cursor advances along an exact edge.
    fn step(
        &self,
        state: StateId,
        prefix: &mut SmallVec<[char; 32]>,
        rest: &[char],
        budget: u32,
        ignore: Option<char>,
        found: &mut Vec<String>,
    ) {
        let edges = &self.dawg.arena.state(state).edges;

        if let Some((&c, rest_tail)) = rest.split_first() {
            // Consume the query character along its own edge, for free.
            if Some(c) != ignore {
                if let Some(next) = edges.get(c) {
                    prefix.push(c);
                    self.step(next, prefix, rest_tail, budget, None, found);
                    prefix.pop();
                    if self.over_cap(found) {
                        return;
                    }
                }
            }

            if budget > 0 {
                // Substitution: consume the query character but follow some
                // other edge.
                for (ch, next) in edges.iter() {
                    if ch != c && Some(ch) != ignore {
                        prefix.push(ch);
                        self.step(next, prefix, rest_tail, budget - 1, Some(c), found);
                        prefix.pop();
                        if self.over_cap(found) {
                            return;
                        }
                    }
                }

                // Deletion: the query has a character the word does not.
                if self.allow_delete {
                    self.step(state, prefix, rest_tail, budget - 1, Some(c), found);
                    if self.over_cap(found) {
                        return;
                    }
                }
            }
        } else if self.dawg.arena.state(state).accepting {
            found.push(prefix.iter().collect());
        }

        // Insertion: the word has a character the query does not. Tried on
        // every call, but only extends words once the query is exhausted.
        if budget > 0 && self.allow_insert {
            let c = rest.first().copied();
            for (ch, next) in edges.iter() {
                if Some(ch) != c && Some(ch) != ignore {
                    prefix.push(ch);
                    self.step(next, prefix, rest, budget - 1, None, found);
                    prefix.pop();
                    if self.over_cap(found) {
                        return;
                    }
                }
            }
        }
    }
}

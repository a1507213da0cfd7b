/// DAWG builder: trie insertion, word sources, and the `IntoWord` trait.
pub mod builder;
/// Per-state ordered edge index.
pub(crate) mod edges;
/// Trie-to-DAWG minimization.
pub(crate) mod minimize;
/// Random sampling of accepted words.
#[cfg(feature = "rand")]
pub mod random;
/// Approximate (edit-distance bounded) search.
pub mod search;
/// States and the arena that owns them.
pub(crate) mod state;

pub use builder::{build_dawg, build_dawg_from_file, build_dawg_from_reader};
pub use builder::{Builder, DawgError, IntoWord};

use state::{StateArena, StateId};

/// An immutable directed acyclic word graph.
///
/// Built once from a word list via [`Builder`] or the `build_dawg*` free
/// functions, then queried any number of times. The graph never changes
/// after construction, so it is safe to share across threads and to search
/// from several threads at once.
#[derive(Debug)]
pub struct Dawg {
    pub(crate) arena: StateArena,
    pub(crate) root: StateId,
    node_count: usize,
}

impl Dawg {
    pub(crate) fn from_parts(arena: StateArena, root: StateId, node_count: usize) -> Self {
        Dawg {
            arena,
            root,
            node_count,
        }
    }

    /// Returns true if the word is in the graph.
    ///
    /// O(word length) walk along exact edges.
    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .try_fold(self.root, |state, ch| self.arena.state(state).edges.get(ch))
            .is_some_and(|state| self.arena.state(state).accepting)
    }

    /// Returns the number of live states, including the root.
    ///
    /// After minimization this is the pre-minimization state count minus the
    /// number of merges performed.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eight_states_for_shared_suffixes() {
        // "test", "rest" and "nest" share the "est" suffix chain, and "note"
        // shares its accepting leaf; 8 states survive, root included.
        let dawg = build_dawg(["test", "rest", "nest", "note"]);
        assert_eq!(dawg.node_count(), 8);
    }

    #[test]
    fn all_words() {
        let words: Vec<String> = ["ing", "ed", "er", "ers", ""]
            .iter()
            .flat_map(|suffix| {
                ["bak", "fak", "lak", "mak", "talk", "walk", "work"]
                    .iter()
                    .map(move |stem| format!("{stem}{suffix}"))
            })
            .collect();
        let dawg = build_dawg(&words);
        for word in &words {
            assert!(dawg.contains(word), "{word}");
        }
        // And some non-words.
        assert!(!dawg.contains("bak3"));
        assert!(!dawg.contains("waking"));
        assert!(!dawg.contains("workerss"));
        assert!(!dawg.contains(""));
    }

    #[test]
    fn dawg_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dawg>();
    }

    #[test]
    fn node_count_never_exceeds_trie_size() {
        let dawg = build_dawg(["banana", "bandana", "cabana"]);
        assert!(dawg.node_count() <= 1 + 6 + 7 + 6);
        assert!(dawg.contains("bandana"));
    }
}

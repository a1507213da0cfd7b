//! Trie-to-DAWG minimization.
//!
//! Runs in two phases over the freshly built trie:
//!
//! 1. **Classification**: every state below the root is assigned a level, its
//!    height above the deepest leaf it can reach. Heights are computed
//!    children-first, so the subtrees under each of the root's direct edges
//!    are classified on their own worker threads (they are disjoint in a
//!    trie). Appends to a level's collection are serialized by that level's
//!    own lock; the thread scope is the wait-for-all barrier.
//! 2. **Merge**: levels are scanned in ascending order. Two states at the
//!    same level merge when they have the same acceptance flag and the same
//!    outgoing edges. Because every deeper level is already canonical,
//!    comparing edge targets by handle is a full structural comparison. The
//!    later state's sole incoming edge is redirected to the earlier one, and
//!    the later state becomes unreachable.

use std::sync::Mutex;
use std::thread;

use super::state::{StateArena, StateId};

/// Minimizes the trie rooted at `root` in place.
///
/// `max_depth` is the longest inserted word in code points, an upper bound on
/// state heights. Returns the number of states merged away. Running this on
/// an already-minimized graph merges nothing.
pub(crate) fn minimize(arena: &mut StateArena, root: StateId, max_depth: usize) -> usize {
    if max_depth == 0 {
        return 0;
    }
    let levels = classify(arena, root, max_depth);
    merge_levels(arena, levels)
}

/// Phase 1: groups every state below the root by height, bottom-up.
fn classify(arena: &StateArena, root: StateId, max_depth: usize) -> Vec<Vec<StateId>> {
    let levels: Vec<Mutex<Vec<StateId>>> = (0..max_depth).map(|_| Mutex::new(Vec::new())).collect();

    let children: Vec<StateId> = arena.state(root).edges.iter().map(|(_, child)| child).collect();
    thread::scope(|scope| {
        for child in children {
            let levels = &levels;
            scope.spawn(move || {
                classify_subtree(arena, child, levels);
            });
        }
    });

    levels
        .into_iter()
        .map(|level| level.into_inner().expect("level lock poisoned"))
        .collect()
}

/// Records `state` and everything below it into `levels`, children first.
///
/// Returns the height of `state` plus one, i.e. the number of levels its
/// subtree occupies.
fn classify_subtree(arena: &StateArena, state: StateId, levels: &[Mutex<Vec<StateId>>]) -> usize {
    let mut level = 0;
    for (_, child) in arena.state(state).edges.iter() {
        level = level.max(classify_subtree(arena, child, levels));
    }
    levels[level]
        .lock()
        .expect("level lock poisoned")
        .push(state);
    level + 1
}

/// Phase 2: merges duplicate states level by level, deepest first.
///
/// Levels must be processed in ascending order: the handle comparison inside
/// [`states_equal`] is only sound once every deeper level has been fully
/// merged and parent edges retargeted.
fn merge_levels(arena: &mut StateArena, levels: Vec<Vec<StateId>>) -> usize {
    let mut merged = 0;
    for mut level in levels {
        let mut i = 0;
        while i < level.len() {
            let mut j = i + 1;
            while j < level.len() {
                if states_equal(arena, level[i], level[j]) {
                    redirect_incoming_edge(arena, level[j], level[i]);
                    level.remove(j);
                    merged += 1;
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }
    merged
}

/// Structural equality of two distinct states whose children are canonical.
fn states_equal(arena: &StateArena, a: StateId, b: StateId) -> bool {
    if a == b {
        // A state reachable along several paths shows up in its level once
        // per path; it must never be merged with itself.
        return false;
    }
    let (sa, sb) = (arena.state(a), arena.state(b));
    sa.accepting == sb.accepting && sa.edges == sb.edges
}

/// Points the dead state's sole incoming edge at its canonical twin.
fn redirect_incoming_edge(arena: &mut StateArena, dead: StateId, canonical: StateId) {
    let (owner, label) = arena
        .state(dead)
        .parent
        .expect("merged state has no incoming edge");
    debug_assert_eq!(
        arena.state(owner).edges.get(label),
        Some(dead),
        "incoming edge no longer points at the state being merged"
    );
    arena.state_mut(owner).edges.retarget(label, canonical);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dawg::Builder;

    fn trie_of(words: &[&str]) -> Builder {
        let mut builder = Builder::new();
        for word in words {
            builder.add_word(*word);
        }
        builder
    }

    #[test]
    fn merges_shared_suffixes() {
        let mut builder = trie_of(&["test", "rest", "nest", "note"]);
        // 15 created states + root before merging.
        assert_eq!(builder.arena.len(), 16);
        let merged = minimize(&mut builder.arena, builder.root, builder.max_word_len);
        assert_eq!(merged, 8);
    }

    #[test]
    fn minimization_is_idempotent() {
        let mut builder = trie_of(&["test", "rest", "nest", "note"]);
        let max_depth = builder.max_word_len;
        minimize(&mut builder.arena, builder.root, max_depth);
        let second = minimize(&mut builder.arena, builder.root, max_depth);
        assert_eq!(second, 0);
    }

    #[test]
    fn nothing_to_merge_in_a_single_word() {
        let mut builder = trie_of(&["alone"]);
        let merged = minimize(&mut builder.arena, builder.root, builder.max_word_len);
        assert_eq!(merged, 0);
    }

    #[test]
    fn empty_trie_merges_nothing() {
        let mut builder = trie_of(&[]);
        let merged = minimize(&mut builder.arena, builder.root, builder.max_word_len);
        assert_eq!(merged, 0);
    }

    #[test]
    fn wide_fanout_collapses_to_one_chain() {
        // 26 disjoint root subtrees classified in parallel, all spelling the
        // same suffix: the result is a single shared chain.
        let words: Vec<String> = ('a'..='z').map(|c| format!("{c}est")).collect();
        let mut builder = Builder::new();
        for word in &words {
            builder.add_word(word);
        }
        assert_eq!(builder.arena.len(), 1 + 26 * 4);
        let merged = minimize(&mut builder.arena, builder.root, builder.max_word_len);
        // Root plus one canonical state per position survive.
        assert_eq!(1 + 26 * 4 - merged, 5);
    }

    #[test]
    fn accepting_flag_blocks_a_merge() {
        // "to" ends at 'o' but "no" does not extend past it identically:
        // states with different acceptance never merge.
        let mut builder = trie_of(&["to", "ton", "non"]);
        let merged = minimize(&mut builder.arena, builder.root, builder.max_word_len);
        // Leaves n(ton-end) and n(non-end) merge; o(after t, accepting) and
        // o(after n, non-accepting) do not.
        assert_eq!(merged, 1);
    }
}

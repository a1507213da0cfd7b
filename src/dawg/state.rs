//! States and the arena that owns them.
//!
//! States are addressed by stable integer handles into a flat arena, so
//! redirecting an edge during minimization is an index overwrite on the
//! owning state rather than pointer surgery.

use super::edges::EdgeSet;

/// A stable handle to a state in a [`StateArena`].
pub(crate) type StateId = u32;

/// A state in the trie/DAWG.
#[derive(Clone, Debug)]
pub(crate) struct State {
    /// True if some inserted word ends here. Once set, never unset.
    pub accepting: bool,
    /// Outgoing edges, one per distinct character.
    pub edges: EdgeSet,
    /// The single edge pointing at this state, as (owner, label).
    ///
    /// The root has none. Every other state has exactly one incoming edge
    /// until minimization redirects it; the back-reference is only used to
    /// retarget that edge when this state is merged away.
    pub parent: Option<(StateId, char)>,
}

impl State {
    /// Creates a new non-accepting state reached by `label` from `owner`.
    pub fn child_of(owner: StateId, label: char) -> Self {
        State {
            accepting: false,
            edges: EdgeSet::None,
            parent: Some((owner, label)),
        }
    }
}

/// A flat arena of states indexed by [`StateId`].
///
/// States are only ever appended; a merged-away state stays in the arena but
/// becomes unreachable from the root.
#[derive(Debug)]
pub(crate) struct StateArena {
    states: Vec<State>,
}

impl StateArena {
    /// Creates an arena containing only the non-accepting root state.
    pub fn with_root() -> (Self, StateId) {
        let root = State {
            accepting: false,
            edges: EdgeSet::None,
            parent: None,
        };
        (StateArena { states: vec![root] }, 0)
    }

    /// Allocates a state and returns its handle.
    pub fn alloc(&mut self, state: State) -> StateId {
        let id = StateId::try_from(self.states.len()).expect("state count exceeds u32::MAX");
        self.states.push(state);
        id
    }

    /// Returns the state behind the handle.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    /// Returns the state behind the handle, mutably.
    #[inline]
    pub fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id as usize]
    }

    /// Returns the number of states ever allocated, including the root and
    /// any states merged away by minimization.
    pub fn len(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn root_is_first_handle() {
        let (arena, root) = StateArena::with_root();
        assert_eq!(root, 0);
        assert_eq!(arena.len(), 1);
        assert!(!arena.state(root).accepting);
        assert!(arena.state(root).parent.is_none());
    }

    #[test]
    fn alloc_returns_sequential_handles() {
        let (mut arena, root) = StateArena::with_root();
        let a = arena.alloc(State::child_of(root, 'a'));
        let b = arena.alloc(State::child_of(a, 'b'));
        assert_eq!((a, b), (1, 2));
        assert_eq!(arena.state(b).parent, Some((a, 'b')));
        assert_eq!(arena.len(), 3);
    }
}

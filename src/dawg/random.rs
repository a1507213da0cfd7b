//! Random sampling of accepted words of a fixed length.

use hashbrown::HashMap;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::state::StateId;
use super::Dawg;

/// Memo of "can some accepted word end exactly `remaining` edges below this
/// state". Shared suffixes make the same (state, remaining) pair show up on
/// many paths, so the answer is cached per pair.
type FinishMemo = HashMap<(StateId, usize), bool>;

impl Dawg {
    /// Returns a random accepted word of exactly `length` code points, or
    /// `None` if the graph holds no word of that length.
    ///
    /// The walk starts at the root and, at every step, picks uniformly among
    /// the outgoing edges that can still complete a word in the remaining
    /// number of characters. Each eligible edge is equally likely; words
    /// reachable through wider branches are therefore more likely overall.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzydawg::dawg::build_dawg;
    ///
    /// let dawg = build_dawg(["test", "note", "toto", "three"]);
    /// let word = dawg.random_word(5).unwrap();
    /// assert_eq!(word, "three");
    /// assert!(dawg.random_word(6).is_none());
    /// ```
    pub fn random_word(&self, length: usize) -> Option<String> {
        let mut memo = FinishMemo::new();
        if !self.can_finish(self.root, length, &mut memo) {
            return None;
        }

        let mut rng = rand::thread_rng();
        let mut word: SmallVec<[char; 32]> = SmallVec::new();
        let mut state = self.root;
        for remaining in (1..=length).rev() {
            let eligible: Vec<(char, StateId)> = self
                .arena
                .state(state)
                .edges
                .iter()
                .filter(|&(_, next)| self.can_finish(next, remaining - 1, &mut memo))
                .collect();
            let &(ch, next) = eligible.choose(&mut rng)?;
            word.push(ch);
            state = next;
        }
        Some(word.iter().collect())
    }

    fn can_finish(&self, state: StateId, remaining: usize, memo: &mut FinishMemo) -> bool {
        if remaining == 0 {
            return self.arena.state(state).accepting;
        }
        if let Some(&cached) = memo.get(&(state, remaining)) {
            return cached;
        }
        let possible = self
            .arena
            .state(state)
            .edges
            .iter()
            .any(|(_, next)| self.can_finish(next, remaining - 1, memo));
        memo.insert((state, remaining), possible);
        possible
    }
}

use smallvec::SmallVec;
use thiserror::Error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::minimize::minimize;
use super::state::{State, StateArena, StateId};
use super::Dawg;

/// Trait for types that can be used as a word when building a DAWG.
///
/// Implemented for common string types so that [`Builder::add_word`] and
/// [`build_dawg`] accept them directly without manual conversion.
pub trait IntoWord {
    /// Collects this word into a code-point buffer.
    fn collect_word(self) -> SmallVec<[char; 32]>;
}

impl IntoWord for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

/// Errors that can occur when building a DAWG from an external word source.
#[derive(Debug, Error)]
pub enum DawgError {
    /// The underlying line source could not be read. Construction aborts and
    /// no partial graph is returned.
    #[error("failed to read word source: {0}")]
    Source(#[from] std::io::Error),
}

/// A builder for constructing a DAWG incrementally.
///
/// Words are inserted into a trie one at a time, in any order; duplicates are
/// tolerated. [`Builder::build`] then minimizes the trie into a DAWG by
/// merging states with identical suffix behavior.
///
/// # Examples
///
/// ```
/// use fuzzydawg::dawg::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_word("note");
/// builder.add_word("test");
/// let dawg = builder.build();
/// assert!(dawg.contains("note"));
/// assert!(!dawg.contains("not"));
/// ```
pub struct Builder {
    pub(crate) arena: StateArena,
    pub(crate) root: StateId,
    /// States created by insertions, excluding the root.
    pub(crate) created: usize,
    /// Longest inserted word in code points; bounds the minimizer's levels.
    pub(crate) max_word_len: usize,
}

impl Builder {
    /// Creates a new builder containing only the root state.
    pub fn new() -> Self {
        let (arena, root) = StateArena::with_root();
        Builder {
            arena,
            root,
            created: 0,
            max_word_len: 0,
        }
    }

    /// Adds a word to the trie being constructed.
    ///
    /// Walks the word's code points from the root, creating new states and
    /// edges only where the prefix diverges from what already exists, and
    /// marks the final state accepting. Word length is measured in Unicode
    /// code points, so a multi-byte character counts as one unit.
    pub fn add_word(&mut self, word: impl IntoWord) {
        let word = word.collect_word();
        self.insert(&word);
    }

    fn insert(&mut self, word: &[char]) {
        let mut cur = self.root;
        for &ch in word {
            cur = match self.arena.state(cur).edges.get(ch) {
                Some(next) => next,
                None => {
                    let next = self.arena.alloc(State::child_of(cur, ch));
                    self.arena.state_mut(cur).edges.insert(ch, next);
                    self.created += 1;
                    next
                }
            };
        }
        self.arena.state_mut(cur).accepting = true;
        if word.len() > self.max_word_len {
            self.max_word_len = word.len();
        }
    }

    /// Minimizes the trie and returns the finished immutable graph.
    pub fn build(mut self) -> Dawg {
        let merged = minimize(&mut self.arena, self.root, self.max_word_len);
        let node_count = 1 + self.created - merged;
        Dawg::from_parts(self.arena, self.root, node_count)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

/// Builds a DAWG from an iterator of words.
///
/// Words may be given in any order and may repeat.
///
/// # Examples
///
/// ```
/// use fuzzydawg::dawg::build_dawg;
///
/// let dawg = build_dawg(["test", "rest", "nest", "note"]);
/// assert!(dawg.contains("rest"));
/// assert!(!dawg.contains("est"));
/// ```
pub fn build_dawg<W: IntoWord>(words: impl IntoIterator<Item = W>) -> Dawg {
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word);
    }
    builder.build()
}

/// Builds a DAWG from a line-by-line word source.
///
/// Each line is one word. Lines starting with '#' are treated as comments and
/// ignored; empty lines are skipped.
///
/// # Errors
///
/// Returns [`DawgError::Source`] if the reader fails; no partial graph is
/// returned.
pub fn build_dawg_from_reader<R: BufRead>(mut reader: R) -> Result<Dawg, DawgError> {
    let mut builder = Builder::new();

    // Instead of using BufRead::lines() we optimize by calling read_line repeatedly which
    // allows us to reuse the same string instead of allocating a new string for every line.
    let mut buf = String::with_capacity(80);
    loop {
        let bytes_read = reader.read_line(&mut buf)?;
        if bytes_read == 0 {
            break;
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            builder.add_word(word);
        }
        buf.clear();
    }
    Ok(builder.build())
}

/// Builds a DAWG from a dictionary file.
///
/// Reads words from a UTF-8 text file, one word per line, with the same
/// comment and blank-line handling as [`build_dawg_from_reader`].
///
/// # Examples
///
/// ```no_run
/// use fuzzydawg::dawg::build_dawg_from_file;
///
/// let dawg = build_dawg_from_file("dictionary.txt").unwrap();
/// ```
///
/// # Errors
///
/// Returns [`DawgError::Source`] if the file cannot be opened or read.
pub fn build_dawg_from_file(path: impl AsRef<Path>) -> Result<Dawg, DawgError> {
    let file = File::open(path)?;
    build_dawg_from_reader(BufReader::new(file))
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_builder_is_just_the_root() {
        let dawg = Builder::new().build();
        assert_eq!(dawg.node_count(), 1);
        assert!(!dawg.contains(""));
    }

    #[test]
    fn unsorted_and_duplicate_words_are_fine() {
        let dawg = build_dawg(["zulu", "alfa", "zulu", "bravo", "alfa"]);
        assert!(dawg.contains("zulu"));
        assert!(dawg.contains("alfa"));
        assert!(dawg.contains("bravo"));
        assert!(!dawg.contains("charlie"));
    }

    #[test]
    fn prefixes_are_not_words() {
        let dawg = build_dawg(["test", "tester", "wtest"]);
        assert!(dawg.contains("test"));
        assert!(dawg.contains("tester"));
        assert!(dawg.contains("wtest"));
        assert!(!dawg.contains("tes"));
        assert!(!dawg.contains("teste"));
        assert!(!dawg.contains("testers"));
    }

    #[test]
    fn empty_word_marks_the_root() {
        let dawg = build_dawg(["", "a"]);
        assert!(dawg.contains(""));
        assert!(dawg.contains("a"));
    }

    #[test]
    fn graph_shares_suffix_states() {
        // Adding words that reuse an existing suffix chain must not grow the
        // graph beyond the single longest word.
        let single = build_dawg(["abcdef"]);
        let several = build_dawg(["abcdef", "abdef", "abef", "af"]);
        assert_eq!(single.node_count(), "abcdef".len() + 1);
        assert_eq!(several.node_count(), single.node_count());
    }

    #[test]
    fn graph_shares_suffix_states_unicode() {
        let single = build_dawg(["授人以鱼不如授人以渔"]);
        let several = build_dawg(["授人以渔", "授人以鱼不如授人以渔"]);
        assert_eq!(several.node_count(), single.node_count());
    }

    #[test]
    fn reader_skips_comments_and_blank_lines() {
        let text = "# dictionary\nnest\n\n  # indented comment\nnote\ntest\n";
        let dawg = build_dawg_from_reader(text.as_bytes()).unwrap();
        assert!(dawg.contains("nest"));
        assert!(dawg.contains("note"));
        assert!(dawg.contains("test"));
        assert!(!dawg.contains("# dictionary"));
    }

    #[test]
    fn reader_trims_line_endings() {
        let text = "nest\r\nnote\r\n";
        let dawg = build_dawg_from_reader(text.as_bytes()).unwrap();
        assert!(dawg.contains("nest"));
        assert!(dawg.contains("note"));
        assert!(!dawg.contains("note\r"));
    }

    #[test]
    fn build_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nest\nnote\nrest\ntest").unwrap();
        let dawg = build_dawg_from_file(file.path()).unwrap();
        assert_eq!(dawg.node_count(), 8);
        assert!(dawg.contains("note"));
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let err = build_dawg_from_file("/nonexistent/wordlist.txt").unwrap_err();
        assert!(matches!(err, DawgError::Source(_)));
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
    }

    #[test]
    fn non_comment_whitespace() {
        assert!(!is_comment(" REVERBERATE"));
    }
}

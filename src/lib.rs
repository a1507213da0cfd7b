//! # fuzzydawg
//!
//! A [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) library with fuzzy search.
//!
//! A DAWG is a minimal acyclic finite-state automaton — essentially a trie
//! with shared suffixes — that provides compact storage and O(word length)
//! lookups. Words are inserted into a trie in any order, then the trie is
//! minimized in one pass by merging states with identical suffix behavior,
//! classifying independent subtrees on parallel workers. The resulting graph
//! is immutable and answers both exact membership queries and approximate
//! ones bounded by a Levenshtein edit-distance budget.
//!
//! ## Features
//!
//! - **Compact**: suffix sharing minimizes memory usage
//! - **Fast**: O(word length) exact lookups over an index-arena graph
//! - **Fuzzy**: bounded edit-distance search with substitutions and optional
//!   insertions/deletions, capped result counts, and early pruning
//! - **Thread-safe**: the built [`Dawg`](dawg::Dawg) is immutable, so
//!   searches may run concurrently without locking
//!
//! ## Quick Start
//!
//! ```
//! use fuzzydawg::dawg::build_dawg;
//!
//! let dawg = build_dawg(["test", "rest", "nest", "note"]);
//!
//! // Exact membership.
//! assert!(dawg.contains("nest"));
//! assert!(!dawg.contains("est"));
//!
//! // Everything within one substitution of "test".
//! let close = dawg.search("test", 1, 10, false, false);
//! assert_eq!(close.len(), 3);
//!
//! // "best" is one substitution away from three of the words.
//! let close = dawg.search("best", 1, 10, true, true);
//! assert_eq!(close, ["nest", "rest", "test"]);
//! ```
//!
//! ## Loading a dictionary
//!
//! Words can also come from any line-by-line source; lines starting with `#`
//! are treated as comments:
//!
//! ```
//! use fuzzydawg::dawg::build_dawg_from_reader;
//!
//! let text = "# tiny dictionary\nnest\nnote\nrest\ntest\n";
//! let dawg = build_dawg_from_reader(text.as_bytes()).unwrap();
//! assert_eq!(dawg.node_count(), 8);
//! ```

#![warn(missing_docs)]

/// Core DAWG data structure: graph handle, builder, minimizer, and search.
pub mod dawg;

//! Example: querying a small dictionary.
//!
//! Builds a DAWG from a word array, then runs exact lookups and fuzzy
//! searches with different edit budgets and flags.
//!
//! Run with: cargo run --example wordlist

use fuzzydawg::dawg::build_dawg;

fn main() {
    let words = ["bake", "baked", "baker", "cake", "caked", "fake", "lake"];
    let dawg = build_dawg(words);
    println!("{} words, {} graph states", words.len(), dawg.node_count());

    // Exact lookup
    println!("\nExact lookup:");
    for word in ["bake", "baker", "bakes", "cake", "lake", "make"] {
        println!("  {word}: {}", if dawg.contains(word) { "yes" } else { "no" });
    }

    // One substitution
    println!("\nWithin one substitution of \"make\":");
    for word in dawg.search("make", 1, 10, false, false) {
        println!("  {word}");
    }

    // Insertions and deletions too
    println!("\nWithin one edit of \"bakes\" (insert/delete allowed):");
    for word in dawg.search("bakes", 1, 10, true, true) {
        println!("  {word}");
    }

    // Random sampling
    #[cfg(feature = "rand")]
    println!("\nA random five-letter word: {:?}", dawg.random_word(5));
}

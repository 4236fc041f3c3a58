//! Build script to generate embedded word lists
//!
//! Turns the plain-text lists under data/ into const string arrays the
//! `wordlists::embedded` module includes at compile time.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

struct WordList {
    input: &'static str,
    output: &'static str,
    const_name: &'static str,
    doc: &'static str,
}

const LISTS: &[WordList] = &[
    WordList {
        input: "data/solutions.txt",
        output: "solutions.rs",
        const_name: "SOLUTIONS",
        doc: "Curated solution pool (words eligible to be the target)",
    },
    WordList {
        input: "data/guesses.txt",
        output: "guesses.rs",
        const_name: "GUESSES",
        doc: "All accepted guess words",
    },
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    for list in LISTS {
        generate_word_list(list, &out_dir.join(list.output));
        println!("cargo:rerun-if-changed={}", list.input);
    }
}

fn generate_word_list(list: &WordList, output_path: &Path) {
    let content = fs::read_to_string(list.input)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", list.input));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut generated = String::new();
    generated.push_str("// Generated word list\n\n");
    generated.push_str(&format!("/// {}\n", list.doc));
    generated.push_str(&format!("pub const {}: &[&str] = &[\n", list.const_name));
    for word in &words {
        generated.push_str(&format!("    \"{word}\",\n"));
    }
    generated.push_str("];\n\n");
    generated.push_str(&format!("/// Number of words in {}\n", list.const_name));
    generated.push_str(&format!(
        "pub const {}_COUNT: usize = {};\n",
        list.const_name,
        words.len()
    ));

    fs::write(output_path, generated)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

//! Utility modules for the feature encoders.
//!
//! This module contains the string interning table behind the vocabularies
//! and the text capabilities consumed by the token encoder.

mod string_table;
mod text;

pub use string_table::StringTable;
pub use text::{split_words, NoStemmer, NoStopWords, Stemmer, StopWordSet, StopWords};

//! Text capabilities used by the token encoder.
//!
//! The token encoder only sees stopword lists and stemmers through the
//! [`StopWords`] and [`Stemmer`] traits. Both are read-only and are shared
//! between encoders behind an `Arc`.

use ahash::AHashSet;
use std::fmt;

/// A set of words to drop before a token enters the vocabulary.
pub trait StopWords: Send + Sync {
    /// Returns true if `token` is a stopword.
    ///
    /// Tokens are passed lowercased.
    fn contains(&self, token: &str) -> bool;
}

/// Reduces a token to its normalized stem.
pub trait Stemmer: Send + Sync {
    /// Returns the stem of `token`.
    fn stem(&self, token: &str) -> String;
}

/// Stopword list that drops nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStopWords;

impl StopWords for NoStopWords {
    fn contains(&self, _token: &str) -> bool {
        false
    }
}

/// Stemmer that returns tokens unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStemmer;

impl Stemmer for NoStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Stopword list backed by a hash set.
///
/// # Example
///
/// ```rust
/// use ftrgen::utils::{StopWordSet, StopWords};
///
/// let stop_words = StopWordSet::new(["The", "and"]);
/// assert!(stop_words.contains("the"));
/// assert!(!stop_words.contains("fox"));
/// ```
#[derive(Clone, Default)]
pub struct StopWordSet {
    words: AHashSet<String>,
}

impl StopWordSet {
    /// Creates a stopword list from `words`. Words are stored lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Debug for StopWordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopWordSet")
            .field("len", &self.words.len())
            .finish()
    }
}

impl StopWords for StopWordSet {
    fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

/// Splits `text` into lowercase alphanumeric runs.
///
/// Any character that is not alphanumeric separates tokens.
pub fn split_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

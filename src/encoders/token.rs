//! Token Encoder implementation.
//!
//! The Token Encoder turns free text into a bag-of-words block. Text is split
//! into words, stopwords are removed, the remaining words are stemmed, and each
//! stem seen during fitting owns one dimension weighted by its term frequency.

use crate::encoders::base::global_index;
use crate::encoders::{Encoder, Fit};
use crate::error::{FtrGenError, Result};
use crate::types::{Real, SparseVector, ValueId};
use crate::utils::{split_words, Stemmer, StopWords, StringTable};
use ahash::AHashSet;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use crate::serialization::{Serializable, SerializableFormat};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fitted state of a [`Token`] encoder.
///
/// This is what gets persisted. The stopword list and the stemmer are not
/// part of it and must be supplied again with [`Token::from_state`].
///
/// Every vocabulary entry carries a document frequency between 1 and `docs`.
/// Loading rejects state that breaks this.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TokenState {
    docs: u64,
    vocabulary: StringTable,
    doc_freq: Vec<u64>,
}

impl TokenState {
    /// Returns the number of documents observed.
    pub fn docs(&self) -> u64 {
        self.docs
    }

    /// Returns the vocabulary of stems in id order.
    pub fn vocabulary(&self) -> &StringTable {
        &self.vocabulary
    }

    /// Returns the document frequency of every stem, indexed by id.
    pub fn doc_freq(&self) -> &[u64] {
        &self.doc_freq
    }

    #[cfg(feature = "serde")]
    fn validate(&self) -> Result<()> {
        if self.doc_freq.len() != self.vocabulary.len() {
            return Err(FtrGenError::CorruptState {
                message: format!(
                    "{} document frequencies for {} tokens",
                    self.doc_freq.len(),
                    self.vocabulary.len()
                ),
            });
        }
        if let Some(id) = self
            .doc_freq
            .iter()
            .position(|&df| df == 0 || df > self.docs)
        {
            return Err(FtrGenError::CorruptState {
                message: format!(
                    "document frequency {} of token {} outside [1, {}]",
                    self.doc_freq[id], id, self.docs
                ),
            });
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TokenState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            docs: u64,
            vocabulary: StringTable,
            doc_freq: Vec<u64>,
        }

        let fields = Fields::deserialize(deserializer)?;
        let state = TokenState {
            docs: fields.docs,
            vocabulary: fields.vocabulary,
            doc_freq: fields.doc_freq,
        };
        state
            .validate()
            .map_err(<D::Error as serde::de::Error>::custom)?;
        Ok(state)
    }
}

/// Bag-of-words encoder for free text.
///
/// # Example
///
/// ```rust
/// use ftrgen::encoders::{Token, Encoder};
/// use ftrgen::utils::{NoStemmer, StopWordSet};
/// use std::sync::Arc;
///
/// let stop_words = Arc::new(StopWordSet::new(["the", "a"]));
/// let mut encoder = Token::new(stop_words, Arc::new(NoStemmer));
///
/// encoder.update("The quick fox");
/// encoder.update("a lazy dog");
///
/// assert_eq!(encoder.docs(), 2);
/// assert_eq!(encoder.num_tokens(), 4);
///
/// let vector = encoder.encode_to_vector("dog dog fox cat").unwrap();
/// assert_eq!(vector.entries(), &[(1, 1.0), (3, 2.0)]);
/// ```
#[derive(Clone)]
pub struct Token {
    stop_words: Arc<dyn StopWords>,
    stemmer: Arc<dyn Stemmer>,
    docs: u64,
    vocabulary: StringTable,
    doc_freq: Vec<u64>,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("docs", &self.docs)
            .field("num_tokens", &self.vocabulary.len())
            .finish_non_exhaustive()
    }
}

impl Token {
    /// Creates a new Token Encoder with an empty vocabulary.
    pub fn new(stop_words: Arc<dyn StopWords>, stemmer: Arc<dyn Stemmer>) -> Self {
        Self::from_state(TokenState::default(), stop_words, stemmer)
    }

    /// Rebuilds an encoder from previously fitted state.
    pub fn from_state(
        state: TokenState,
        stop_words: Arc<dyn StopWords>,
        stemmer: Arc<dyn Stemmer>,
    ) -> Self {
        Self {
            stop_words,
            stemmer,
            docs: state.docs,
            vocabulary: state.vocabulary,
            doc_freq: state.doc_freq,
        }
    }

    /// Returns a copy of the fitted state.
    pub fn state(&self) -> TokenState {
        TokenState {
            docs: self.docs,
            vocabulary: self.vocabulary.clone(),
            doc_freq: self.doc_freq.clone(),
        }
    }

    /// Splits `text` into normalized tokens.
    ///
    /// Words are lowercased, stopwords are dropped and the rest are stemmed.
    /// Duplicates are kept, in text order.
    pub fn get_token_v(&self, text: &str) -> Vec<String> {
        split_words(text)
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| self.stemmer.stem(&word))
            .filter(|stem| !stem.is_empty())
            .collect()
    }

    /// Observes one document.
    ///
    /// Every distinct token of the document enters the vocabulary and gains
    /// one document, however often it repeats.
    pub fn update(&mut self, text: &str) {
        self.docs += 1;

        let mut seen = AHashSet::new();
        for token in self.get_token_v(text) {
            if seen.insert(token.clone()) {
                let id = self.vocabulary.insert_or_get_id(&token);
                if id == self.doc_freq.len() {
                    self.doc_freq.push(0);
                }
                self.doc_freq[id] += 1;
            }
        }
    }

    /// Returns term frequencies of known tokens keyed by vocabulary id.
    pub fn term_frequencies(&self, text: &str) -> BTreeMap<ValueId, usize> {
        let mut counts = BTreeMap::new();
        for token in self.get_token_v(text) {
            if let Some(id) = self.vocabulary.id_of(&token) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Returns the number of documents observed.
    pub fn docs(&self) -> u64 {
        self.docs
    }

    /// Returns the vocabulary size.
    pub fn num_tokens(&self) -> usize {
        self.vocabulary.len()
    }

    /// Returns the token with id `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below [`num_tokens`](Self::num_tokens).
    pub fn get_val(&self, index: usize) -> Result<&str> {
        self.vocabulary
            .key_at(index)
            .ok_or(FtrGenError::IndexOutOfBounds {
                index,
                size: self.vocabulary.len(),
            })
    }

    /// Returns the number of documents token `id` appeared in.
    pub fn doc_freq(&self, id: ValueId) -> Option<u64> {
        self.doc_freq.get(id).copied()
    }

    /// Returns the vocabulary id of an already normalized token.
    pub fn token_id(&self, token: &str) -> Option<ValueId> {
        self.vocabulary.id_of(token)
    }

    /// Returns the shared stopword list.
    pub fn stop_words(&self) -> &Arc<dyn StopWords> {
        &self.stop_words
    }

    /// Returns the shared stemmer.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

#[cfg(feature = "serde")]
impl Token {
    /// Serializes the fitted state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self, format: SerializableFormat) -> Result<Vec<u8>> {
        self.state().to_bytes(format)
    }

    /// Rebuilds an encoder from serialized state and the given capabilities.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not a valid serialized state.
    pub fn from_bytes(
        bytes: &[u8],
        format: SerializableFormat,
        stop_words: Arc<dyn StopWords>,
        stemmer: Arc<dyn Stemmer>,
    ) -> Result<Self> {
        let state = TokenState::from_bytes(bytes, format)?;
        Ok(Self::from_state(state, stop_words, stemmer))
    }
}

impl Fit<&str> for Token {
    fn update(&mut self, text: &str) {
        Token::update(self, text);
    }
}

impl Encoder<&str> for Token {
    fn size(&self) -> usize {
        self.vocabulary.len()
    }

    fn encode(&self, text: &str, output: &mut SparseVector, offset: usize) -> Result<()> {
        let entries = self
            .term_frequencies(text)
            .into_iter()
            .map(|(id, tf)| global_index(offset, id).map(|index| (index, tf as Real)))
            .collect::<Result<Vec<_>>>()?;
        output.extend(entries);
        Ok(())
    }
}

//! # ftrgen - Incremental Feature Encoders
//!
//! ftrgen turns raw field values (numbers, categorical strings, free text and
//! pre-built sparse vectors) into entries of one shared sparse feature vector
//! that a downstream machine-learning model consumes.
//!
//! ## Overview
//!
//! Every encoder works in two phases:
//!
//! - **Fitting**: an online pass over raw values ([`Fit::update`]) that grows
//!   the encoder's statistics or vocabulary.
//! - **Projection**: mapping one value to `(index, weight)` pairs using the
//!   fitted state ([`Encoder::encode`]). Projection never mutates the encoder.
//!
//! The available encoders are:
//!
//! - [`Numeric`](encoders::Numeric): running min/max with linear scaling
//! - [`Nominal`](encoders::Nominal): one-hot encoding of categories
//! - [`MultiNominal`](encoders::MultiNominal): multi-hot encoding of category sets
//! - [`Token`](encoders::Token): bag-of-words encoding of free text
//! - [`SparseNumeric`](encoders::SparseNumeric): remapping of already sparse vectors
//!
//! [`FeatureVectorBuilder`](encoders::FeatureVectorBuilder) chains encoders
//! into one global vector and owns the running offset between them.
//!
//! ## Quick Start
//!
//! ```rust
//! use ftrgen::prelude::*;
//!
//! let mut age = Numeric::default();
//! let mut color = Nominal::new();
//!
//! for (a, c) in [(20.0, "red"), (60.0, "blue")] {
//!     age.update(a);
//!     color.update(c);
//! }
//!
//! let mut builder = FeatureVectorBuilder::new();
//! builder.append_field(&age, 40.0).unwrap();
//! builder.append_field(&color, "blue").unwrap();
//!
//! assert_eq!(builder.offset(), 3);
//! let vector = builder.build();
//! assert_eq!(vector.entries(), &[(0, 0.5), (2, 1.0)]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable persistence of fitted encoders (bincode and JSON)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod encoders;
pub mod types;
pub mod utils;

#[cfg(feature = "serde")]
pub mod serialization;

/// Re-export of commonly used types and traits for convenience.
pub mod prelude {
    pub use crate::encoders::{
        Encoder, FeatureVectorBuilder, Fit, MultiNominal, Nominal, Numeric, NumericParams,
        SparseNumeric, Token, TokenState,
    };
    pub use crate::types::{FtrIndex, Real, SparseVector};
    pub use crate::utils::{NoStemmer, NoStopWords, Stemmer, StopWordSet, StopWords, StringTable};

    #[cfg(feature = "serde")]
    pub use crate::serialization::{Serializable, SerializableFormat};
}

pub use encoders::{Encoder, Fit};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for the library.
pub mod error {
    use thiserror::Error;

    /// Main error type for ftrgen operations.
    #[derive(Error, Debug)]
    pub enum FtrGenError {
        /// Invalid parameter value.
        #[error("Invalid parameter '{name}': {message}")]
        InvalidParameter {
            /// Name of the invalid parameter.
            name: &'static str,
            /// Description of the error.
            message: String,
        },

        /// Index out of bounds.
        #[error("Index {index} out of bounds (size: {size})")]
        IndexOutOfBounds {
            /// The invalid index.
            index: usize,
            /// The valid size.
            size: usize,
        },

        /// Persisted encoder state is truncated or malformed.
        #[error("Corrupt encoder state: {message}")]
        CorruptState {
            /// Description of what was wrong with the state.
            message: String,
        },

        /// Serialization error.
        #[cfg(feature = "serde")]
        #[error("Serialization error: {message}")]
        SerializationError {
            /// Description of the serialization error.
            message: String,
        },

        /// I/O error.
        #[error("I/O error: {message}")]
        IoError {
            /// Description of the I/O error.
            message: String,
        },
    }

    /// Result type alias using `FtrGenError`.
    pub type Result<T> = std::result::Result<T, FtrGenError>;
}

pub use error::{FtrGenError, Result};

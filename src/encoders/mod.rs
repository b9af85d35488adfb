//! Encoders for projecting raw field values into a sparse feature vector.
//!
//! Each encoder is fitted online with [`Fit::update`] and then projects values
//! with [`Encoder::encode`] into a block of [`Encoder::size`] dimensions.
//!
//! # Available Encoders
//!
//! ## Numeric Encoders
//! - [`Numeric`]: One dimension holding the min-max scaled value
//! - [`SparseNumeric`]: Re-emits an already sparse vector at an offset
//!
//! ## Categorical Encoders
//! - [`Nominal`]: One-hot encoding of a single category
//! - [`MultiNominal`]: Multi-hot encoding of a set of categories
//!
//! ## Text Encoders
//! - [`Token`]: Bag-of-words encoding with stopword removal and stemming
//!
//! ## Composition
//! - [`FeatureVectorBuilder`]: Chains encoders and owns the running offset
//!
//! # Example
//!
//! ```rust
//! use ftrgen::encoders::{Encoder, Numeric, NumericParams};
//!
//! let mut encoder = Numeric::new(NumericParams { normalize: true });
//! encoder.update(0.0);
//! encoder.update(100.0);
//!
//! let vector = encoder.encode_to_vector(25.0).unwrap();
//! assert_eq!(vector.entries(), &[(0, 0.25)]);
//! ```

mod base;
mod builder;
mod multi_nominal;
mod nominal;
mod numeric;
mod sparse_numeric;
mod token;

pub use base::{Encoder, Fit};
pub use builder::{EncoderField, FeatureVectorBuilder};
pub use multi_nominal::MultiNominal;
pub use nominal::Nominal;
pub use numeric::{Numeric, NumericParams};
pub use sparse_numeric::SparseNumeric;
pub use token::{Token, TokenState};

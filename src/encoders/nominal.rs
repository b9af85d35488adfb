//! Nominal Encoder implementation.
//!
//! The Nominal Encoder learns the set of categories of a field and encodes each
//! category as a one-hot entry in a block as wide as the number of categories.

use crate::encoders::base::global_index;
use crate::encoders::{Encoder, Fit};
use crate::error::{FtrGenError, Result};
use crate::types::{SparseVector, ValueId};
use crate::utils::StringTable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encodes discrete categories as one-hot entries.
///
/// Categories get ids in first-seen order. Categories never seen during
/// fitting are dropped at projection time, not reported as errors.
///
/// # Example
///
/// ```rust
/// use ftrgen::encoders::{Nominal, Encoder};
///
/// let mut encoder = Nominal::new();
/// for color in ["red", "blue", "red", "green"] {
///     encoder.update(color);
/// }
///
/// assert_eq!(encoder.num_values(), 3);
/// assert_eq!(encoder.get_ftr("blue"), Some(1));
/// assert_eq!(encoder.get_ftr("purple"), None);
///
/// let vector = encoder.encode_to_vector("green").unwrap();
/// assert_eq!(vector.entries(), &[(2, 1.0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nominal {
    values: StringTable,
}

impl Nominal {
    /// Creates a new Nominal Encoder with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a category, assigning it the next id if it is new.
    pub fn update(&mut self, value: &str) {
        self.values.insert_or_get_id(value);
    }

    /// Returns the id of `value`, or `None` if it was never observed.
    pub fn get_ftr(&self, value: &str) -> Option<ValueId> {
        self.values.id_of(value)
    }

    /// Returns the number of distinct categories.
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Returns the category with id `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below [`num_values`](Self::num_values).
    pub fn get_val(&self, index: usize) -> Result<&str> {
        self.values.key_at(index).ok_or(FtrGenError::IndexOutOfBounds {
            index,
            size: self.values.len(),
        })
    }

    /// Iterates over the categories in id order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.iter()
    }
}

impl Fit<&str> for Nominal {
    fn update(&mut self, value: &str) {
        Nominal::update(self, value);
    }
}

impl Fit<String> for Nominal {
    fn update(&mut self, value: String) {
        Nominal::update(self, &value);
    }
}

impl Encoder<&str> for Nominal {
    fn size(&self) -> usize {
        self.values.len()
    }

    fn encode(&self, value: &str, output: &mut SparseVector, offset: usize) -> Result<()> {
        if let Some(id) = self.get_ftr(value) {
            output.push(global_index(offset, id)?, 1.0);
        }
        Ok(())
    }
}

impl Encoder<String> for Nominal {
    fn size(&self) -> usize {
        self.values.len()
    }

    fn encode(&self, value: String, output: &mut SparseVector, offset: usize) -> Result<()> {
        self.encode(value.as_str(), output, offset)
    }
}

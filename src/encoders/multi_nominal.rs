//! Multi-Nominal Encoder implementation.
//!
//! Encodes a set of categories as a multi-hot block. Each category is handled
//! by an inner [`Nominal`] encoder.

use crate::encoders::base::global_index;
use crate::encoders::{Encoder, Fit, Nominal};
use crate::error::Result;
use crate::types::{SparseVector, ValueId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encodes single categories or sets of categories.
///
/// A list is treated as a set: a category listed twice still produces a single
/// entry with weight 1.
///
/// # Example
///
/// ```rust
/// use ftrgen::encoders::{MultiNominal, Encoder};
///
/// let mut encoder = MultiNominal::new();
/// encoder.update_all(&["rock", "jazz"]);
/// encoder.update("pop");
///
/// let vector = encoder.encode_to_vector(&["pop", "rock", "pop"][..]).unwrap();
/// assert_eq!(vector.entries(), &[(0, 1.0), (2, 1.0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiNominal {
    inner: Nominal,
}

impl MultiNominal {
    /// Creates a new Multi-Nominal Encoder with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a single category.
    pub fn update(&mut self, value: &str) {
        self.inner.update(value);
    }

    /// Observes every category in `values`.
    pub fn update_all<S: AsRef<str>>(&mut self, values: &[S]) {
        for value in values {
            self.inner.update(value.as_ref());
        }
    }

    /// Returns the id of `value`, or `None` if it was never observed.
    pub fn get_ftr(&self, value: &str) -> Option<ValueId> {
        self.inner.get_ftr(value)
    }

    /// Returns the number of distinct categories.
    pub fn num_values(&self) -> usize {
        self.inner.num_values()
    }

    /// Returns the category with id `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below [`num_values`](Self::num_values).
    pub fn get_val(&self, index: usize) -> Result<&str> {
        self.inner.get_val(index)
    }

    /// Returns the inner single-category encoder.
    pub fn nominal(&self) -> &Nominal {
        &self.inner
    }
}

impl From<Nominal> for MultiNominal {
    fn from(inner: Nominal) -> Self {
        Self { inner }
    }
}

impl Fit<&str> for MultiNominal {
    fn update(&mut self, value: &str) {
        MultiNominal::update(self, value);
    }
}

impl<S: AsRef<str>> Fit<&[S]> for MultiNominal {
    fn update(&mut self, values: &[S]) {
        self.update_all(values);
    }
}

impl Encoder<&str> for MultiNominal {
    fn size(&self) -> usize {
        self.inner.num_values()
    }

    fn encode(&self, value: &str, output: &mut SparseVector, offset: usize) -> Result<()> {
        self.inner.encode(value, output, offset)
    }
}

impl<S: AsRef<str>> Encoder<&[S]> for MultiNominal {
    fn size(&self) -> usize {
        self.inner.num_values()
    }

    fn encode(&self, values: &[S], output: &mut SparseVector, offset: usize) -> Result<()> {
        let mut ids: Vec<ValueId> = values
            .iter()
            .filter_map(|v| self.inner.get_ftr(v.as_ref()))
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let entries = ids
            .into_iter()
            .map(|id| global_index(offset, id).map(|index| (index, 1.0)))
            .collect::<Result<Vec<_>>>()?;
        output.extend(entries);
        Ok(())
    }
}

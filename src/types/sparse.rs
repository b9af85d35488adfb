//! Sparse feature vector implementation.
//!
//! A sparse feature vector is an ordered list of `(index, weight)` pairs.
//! Indices are positions in the global feature space shared by all encoders,
//! and entries with a zero weight are omitted by convention.

use crate::error::{FtrGenError, Result};
use crate::types::{FtrIndex, Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of `(index, weight)` pairs.
///
/// The vector keeps entries in the order they were pushed. Encoders append
/// their entries in ascending index order and the builder visits encoders in
/// ascending offset order, so vectors produced by
/// [`FeatureVectorBuilder`](crate::encoders::FeatureVectorBuilder) are sorted.
///
/// # Example
///
/// ```rust
/// use ftrgen::types::SparseVector;
///
/// let mut vector = SparseVector::new();
/// vector.push(3, 2.0);
/// vector.push(7, 0.5);
///
/// assert_eq!(vector.len(), 2);
/// assert_eq!(vector.get(7), Some(0.5));
/// assert_eq!(vector.get(4), None);
/// assert_eq!(vector.to_dense(8).unwrap()[3], 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SparseVector {
    entries: Vec<(FtrIndex, Real)>,
}

impl SparseVector {
    /// Creates an empty sparse vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sparse vector with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends an entry.
    #[inline]
    pub fn push(&mut self, index: FtrIndex, weight: Real) {
        self.entries.push((index, weight));
    }

    /// Returns the number of stored entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vector holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in insertion order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(FtrIndex, Real)] {
        &self.entries
    }

    /// Consumes the vector and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<(FtrIndex, Real)> {
        self.entries
    }

    /// Iterates over `(index, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FtrIndex, Real)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterates over the indices in insertion order.
    pub fn indices(&self) -> impl Iterator<Item = FtrIndex> + '_ {
        self.entries.iter().map(|&(index, _)| index)
    }

    /// Returns the largest index present, if any.
    #[must_use]
    pub fn max_index(&self) -> Option<FtrIndex> {
        self.indices().max()
    }

    /// Returns the weight stored at `index`.
    ///
    /// If the index appears more than once the first occurrence wins.
    #[must_use]
    pub fn get(&self, index: FtrIndex) -> Option<Real> {
        self.entries
            .iter()
            .find(|&&(i, _)| i == index)
            .map(|&(_, weight)| weight)
    }

    /// Returns true if indices are strictly increasing.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 < w[1].0)
    }

    /// Sorts entries by index, keeping the relative order of equal indices.
    pub fn sort_by_index(&mut self) {
        self.entries.sort_by_key(|&(index, _)| index);
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Expands the vector into a dense buffer of length `size`.
    ///
    /// Weights of repeated indices are summed.
    ///
    /// # Errors
    ///
    /// Returns an error if an index does not fit into `size`.
    pub fn to_dense(&self, size: usize) -> Result<Vec<Real>> {
        let mut dense = vec![0.0; size];
        for &(index, weight) in &self.entries {
            let slot = dense
                .get_mut(index)
                .ok_or(FtrGenError::IndexOutOfBounds { index, size })?;
            *slot += weight;
        }
        Ok(dense)
    }

    /// Dot product with another vector, both assumed sorted by index.
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> Real {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_val) = self.entries[i];
            let (b_idx, b_val) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_val * b_val;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

impl From<Vec<(FtrIndex, Real)>> for SparseVector {
    fn from(entries: Vec<(FtrIndex, Real)>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(FtrIndex, Real)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (FtrIndex, Real)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(FtrIndex, Real)> for SparseVector {
    fn extend<I: IntoIterator<Item = (FtrIndex, Real)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = (FtrIndex, Real);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (FtrIndex, Real)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

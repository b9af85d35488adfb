//! Base encoder traits.

use crate::error::{FtrGenError, Result};
use crate::types::{FtrIndex, SparseVector};

/// Trait for projecting values into a sparse feature vector.
///
/// An encoder owns a block of `size()` consecutive dimensions. Where that
/// block starts in the global feature space is decided by the caller through
/// `offset`.
pub trait Encoder<T> {
    /// Returns the number of dimensions this encoder contributes.
    fn size(&self) -> usize;

    /// Encodes a value into the output vector.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to encode
    /// * `output` - The vector to append `(offset + local_index, weight)` pairs to
    /// * `offset` - Start of this encoder's block in the global feature space
    fn encode(&self, value: T, output: &mut SparseVector, offset: usize) -> Result<()>;

    /// Encodes a value at offset 0 and returns a new vector.
    fn encode_to_vector(&self, value: T) -> Result<SparseVector> {
        let mut vector = SparseVector::new();
        self.encode(value, &mut vector, 0)?;
        Ok(vector)
    }
}

/// Trait for encoders that learn from observed values.
pub trait Fit<T> {
    /// Observes one value and updates the fitted state.
    fn update(&mut self, value: T);
}

/// Places a block-local index at `offset` in the global feature space.
pub(crate) fn global_index(offset: usize, index: usize) -> Result<FtrIndex> {
    offset
        .checked_add(index)
        .ok_or(FtrGenError::IndexOutOfBounds {
            index,
            size: usize::MAX - offset,
        })
}

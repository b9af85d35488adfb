//! Sparse Numeric Encoder implementation.
//!
//! Moves an already sparse numeric vector into the global feature space. The
//! encoder learns the largest index it is fed and reserves that many
//! dimensions.

use crate::encoders::base::global_index;
use crate::encoders::{Encoder, Fit, Numeric};
use crate::error::Result;
use crate::types::{SparseVector, NO_INDEX};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reads a persisted maximum index, rejecting values below the empty sentinel.
#[cfg(feature = "serde")]
fn deserialize_max_id<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let max_id = i64::deserialize(deserializer)?;
    if max_id < NO_INDEX {
        return Err(serde::de::Error::custom(format!(
            "negative maximum index {}",
            max_id
        )));
    }
    Ok(max_id)
}

/// Re-emits sparse input vectors at an offset.
///
/// The width of the block is the largest index seen during fitting plus one.
/// Inputs are expected to stay within that width; indices past it are not
/// checked and would land in the next encoder's block.
///
/// # Example
///
/// ```rust
/// use ftrgen::encoders::{SparseNumeric, Encoder};
/// use ftrgen::types::SparseVector;
///
/// let input = SparseVector::from(vec![(0, 1.0), (3, 2.0)]);
///
/// let mut encoder = SparseNumeric::new();
/// encoder.update(&input);
/// assert_eq!(encoder.num_values(), 4);
///
/// let mut output = SparseVector::new();
/// encoder.encode(&input, &mut output, 10).unwrap();
/// assert_eq!(output.entries(), &[(10, 1.0), (13, 2.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparseNumeric {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_max_id"))]
    max_id: i64,

    /// Numeric state kept after the maximum index so older streams still load.
    /// Not used for encoding.
    legacy: Numeric,
}

impl SparseNumeric {
    /// Creates a new Sparse Numeric Encoder with width 0.
    pub fn new() -> Self {
        Self {
            max_id: NO_INDEX,
            legacy: Numeric::default(),
        }
    }

    /// Observes a sparse vector, widening the block to cover its indices.
    pub fn update(&mut self, input: &SparseVector) {
        if let Some(max_index) = input.max_index() {
            let max_index = i64::try_from(max_index).unwrap_or(i64::MAX);
            self.max_id = self.max_id.max(max_index);
        }
    }

    /// Returns the largest index observed, if any.
    pub fn max_id(&self) -> Option<usize> {
        usize::try_from(self.max_id).ok()
    }

    /// Returns the block width.
    pub fn num_values(&self) -> usize {
        self.max_id().map_or(0, |id| id + 1)
    }
}

impl Default for SparseNumeric {
    fn default() -> Self {
        Self::new()
    }
}

impl Fit<&SparseVector> for SparseNumeric {
    fn update(&mut self, input: &SparseVector) {
        SparseNumeric::update(self, input);
    }
}

impl Encoder<&SparseVector> for SparseNumeric {
    fn size(&self) -> usize {
        self.num_values()
    }

    fn encode(&self, input: &SparseVector, output: &mut SparseVector, offset: usize) -> Result<()> {
        let entries = input
            .iter()
            .map(|(index, weight)| {
                global_index(offset, index).map(|global| (global, weight))
            })
            .collect::<Result<Vec<_>>>()?;
        output.extend(entries);
        Ok(())
    }
}

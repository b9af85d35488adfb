//! Feature vector builder.
//!
//! The builder chains encoders into one global feature vector. It owns the
//! running offset: each appended encoder writes its block at the current
//! offset, and the offset then moves past the encoder's full width.

use crate::encoders::Encoder;
use crate::error::{FtrGenError, Result};
use crate::types::SparseVector;

/// Block of the global feature space written by one encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderField {
    /// Name of this field, if one was given.
    pub name: Option<String>,
    /// Starting position in the combined vector.
    pub offset: usize,
    /// Width of this encoder's block.
    pub size: usize,
}

/// Builds a sparse feature vector from a sequence of encoders.
///
/// The offset always advances by the encoder's full width, whether or not the
/// encoder emitted anything, so every field keeps a fixed position.
///
/// # Example
///
/// ```rust
/// use ftrgen::encoders::{FeatureVectorBuilder, Nominal, SparseNumeric};
/// use ftrgen::types::SparseVector;
///
/// let mut city = Nominal::new();
/// city.update("Ljubljana");
/// city.update("Maribor");
///
/// let extra = SparseVector::from(vec![(0, 1.0), (3, 2.0)]);
/// let mut sparse = SparseNumeric::new();
/// sparse.update(&extra);
///
/// let mut builder = FeatureVectorBuilder::new();
/// builder
///     .append_named("city", &city, "Koper").unwrap()
///     .append_named("extra", &sparse, &extra).unwrap();
///
/// assert_eq!(builder.offset(), 6);
/// assert_eq!(builder.fields()[1].offset, 2);
///
/// let vector = builder.build();
/// assert_eq!(vector.entries(), &[(2, 1.0), (5, 2.0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeatureVectorBuilder {
    vector: SparseVector,
    offset: usize,
    fields: Vec<EncoderField>,
}

impl FeatureVectorBuilder {
    /// Creates a builder starting at offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose first field starts at `offset`.
    pub fn with_offset(offset: usize) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Encodes `value` at the current offset and moves past the encoder's block.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails; the offset is left unchanged.
    pub fn append_field<T, E>(&mut self, encoder: &E, value: T) -> Result<&mut Self>
    where
        E: Encoder<T> + ?Sized,
    {
        self.append(None, encoder, value)
    }

    /// Same as [`append_field`](Self::append_field), recording a field name.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails; the offset is left unchanged.
    pub fn append_named<T, E>(&mut self, name: &str, encoder: &E, value: T) -> Result<&mut Self>
    where
        E: Encoder<T> + ?Sized,
    {
        self.append(Some(name.to_string()), encoder, value)
    }

    fn append<T, E>(&mut self, name: Option<String>, encoder: &E, value: T) -> Result<&mut Self>
    where
        E: Encoder<T> + ?Sized,
    {
        let size = encoder.size();
        let next = self
            .offset
            .checked_add(size)
            .ok_or(FtrGenError::IndexOutOfBounds {
                index: size,
                size: usize::MAX - self.offset,
            })?;
        let mut block = SparseVector::new();
        encoder.encode(value, &mut block, self.offset)?;

        self.vector.extend(block.into_entries());
        self.fields.push(EncoderField {
            name,
            offset: self.offset,
            size,
        });
        self.offset = next;
        Ok(self)
    }

    /// Returns the offset the next field will start at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the fields appended so far.
    pub fn fields(&self) -> &[EncoderField] {
        &self.fields
    }

    /// Returns the field with the given name.
    pub fn get_field(&self, name: &str) -> Option<&EncoderField> {
        self.fields.iter().find(|f| f.name.as_deref() == Some(name))
    }

    /// Returns the vector built so far.
    pub fn vector(&self) -> &SparseVector {
        &self.vector
    }

    /// Finishes the builder and returns the combined vector.
    pub fn build(self) -> SparseVector {
        tracing::debug!(
            fields = self.fields.len(),
            dimensions = self.offset,
            entries = self.vector.len(),
            "built feature vector"
        );
        self.vector
    }
}

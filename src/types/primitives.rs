//! Primitive type definitions shared by all encoders.

/// Position of an entry in the global feature space.
pub type FtrIndex = usize;

/// Weight of an entry in a feature vector.
pub type Real = f64;

/// Local id assigned to a distinct string by a vocabulary.
pub type ValueId = usize;

/// Sentinel stored as the fitted maximum index of a sparse encoder that has
/// not observed any input yet.
pub const NO_INDEX: i64 = -1;

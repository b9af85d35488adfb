//! Core types for the feature encoders.
//!
//! This module contains the primitive aliases used across the crate and the
//! sparse feature vector that every encoder writes into.

mod primitives;
mod sparse;

pub use primitives::*;
pub use sparse::*;

//! Serialization support for fitted encoders.
//!
//! Fitting and projection often run in different processes. Every encoder's
//! fitted state can be written out and read back through the [`Serializable`]
//! trait, which is implemented for all types that derive `Serialize` and
//! `Deserialize`.
//!
//! # Supported Formats
//!
//! - **Binary** - Compact binary serialization using bincode (default)
//! - **JSON** - Human-readable JSON format using serde_json
//!
//! Fields are written in declaration order, which fixes the logical layout of
//! each encoder:
//!
//! | Encoder | Layout |
//! |---|---|
//! | `Numeric` | `normalize`, `min`, `max` |
//! | `Nominal` / `MultiNominal` | ordered list of values |
//! | `TokenState` | `docs`, ordered vocabulary, document frequencies |
//! | `SparseNumeric` | `max_id`, nested `Numeric` |
//!
//! # Example
//!
//! ```rust
//! use ftrgen::encoders::Nominal;
//! use ftrgen::serialization::{Serializable, SerializableFormat};
//!
//! let mut encoder = Nominal::new();
//! encoder.update("a");
//!
//! let bytes = encoder.to_bytes(SerializableFormat::Binary).unwrap();
//! let restored = Nominal::from_bytes(&bytes, SerializableFormat::Binary).unwrap();
//! assert_eq!(restored.get_ftr("a"), Some(0));
//!
//! let json = encoder.to_json().unwrap();
//! assert_eq!(Nominal::from_json(&json).unwrap(), encoder);
//! ```

use crate::error::{FtrGenError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

/// Serialization format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializableFormat {
    /// Compact binary serialization (default).
    #[default]
    Binary,

    /// Human-readable JSON format.
    /// Useful for debugging and inspecting vocabularies.
    Json,
}

impl std::fmt::Display for SerializableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializableFormat::Binary => write!(f, "BINARY"),
            SerializableFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for SerializableFormat {
    type Err = FtrGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "BINARY" | "BIN" => Ok(SerializableFormat::Binary),
            "JSON" => Ok(SerializableFormat::Json),
            _ => Err(FtrGenError::InvalidParameter {
                name: "format",
                message: format!("Unknown format '{}'. Expected: BINARY, JSON", s),
            }),
        }
    }
}

fn write_error(format: SerializableFormat, e: impl std::fmt::Display) -> FtrGenError {
    FtrGenError::SerializationError {
        message: format!("{} serialization failed: {}", format, e),
    }
}

fn read_error(format: SerializableFormat, e: impl std::fmt::Display) -> FtrGenError {
    FtrGenError::CorruptState {
        message: format!("{} deserialization failed: {}", format, e),
    }
}

/// Trait for types that can be serialized and deserialized.
///
/// Reading never yields a partially initialized value: truncated or malformed
/// input is reported as [`FtrGenError::CorruptState`].
pub trait Serializable: Serialize + DeserializeOwned + Sized {
    /// Serializes to a byte vector.
    fn to_bytes(&self, format: SerializableFormat) -> Result<Vec<u8>> {
        let bytes = match format {
            SerializableFormat::Binary => {
                bincode::serialize(self).map_err(|e| write_error(format, e))?
            }
            SerializableFormat::Json => {
                serde_json::to_vec_pretty(self).map_err(|e| write_error(format, e))?
            }
        };
        tracing::debug!(%format, bytes = bytes.len(), "serialized state");
        Ok(bytes)
    }

    /// Deserializes from a byte slice.
    fn from_bytes(bytes: &[u8], format: SerializableFormat) -> Result<Self> {
        tracing::debug!(%format, bytes = bytes.len(), "deserializing state");
        match format {
            SerializableFormat::Binary => {
                bincode::deserialize(bytes).map_err(|e| read_error(format, e))
            }
            SerializableFormat::Json => {
                serde_json::from_slice(bytes).map_err(|e| read_error(format, e))
            }
        }
    }

    /// Serializes to a JSON string.
    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| write_error(SerializableFormat::Json, e))
    }

    /// Deserializes from a JSON string.
    fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| read_error(SerializableFormat::Json, e))
    }

    /// Serializes to a writer.
    fn save<W: Write>(&self, writer: W, format: SerializableFormat) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        match format {
            SerializableFormat::Binary => {
                bincode::serialize_into(&mut writer, self).map_err(|e| write_error(format, e))?;
            }
            SerializableFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, self)
                    .map_err(|e| write_error(format, e))?;
            }
        }
        writer.flush().map_err(|e| FtrGenError::IoError {
            message: format!("Failed to flush writer: {}", e),
        })
    }

    /// Deserializes from a reader.
    fn load<R: Read>(reader: R, format: SerializableFormat) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        match format {
            SerializableFormat::Binary => {
                bincode::deserialize_from(&mut reader).map_err(|e| read_error(format, e))
            }
            SerializableFormat::Json => {
                serde_json::from_reader(&mut reader).map_err(|e| read_error(format, e))
            }
        }
    }

    /// Saves to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P, format: SerializableFormat) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FtrGenError::IoError {
            message: format!("Failed to create file: {}", e),
        })?;
        tracing::debug!(path = %path.display(), %format, "saving state");
        self.save(file, format)
    }

    /// Loads from a file.
    fn load_from_file<P: AsRef<Path>>(path: P, format: SerializableFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FtrGenError::IoError {
            message: format!("Failed to open file: {}", e),
        })?;
        tracing::debug!(path = %path.display(), %format, "loading state");
        Self::load(file, format)
    }

    /// Saves to a file, inferring format from the file extension.
    ///
    /// - `.json` -> JSON format
    /// - All other extensions -> Binary format
    fn save_to_file_auto<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let format = infer_format_from_path(path.as_ref());
        self.save_to_file(path, format)
    }

    /// Loads from a file, inferring format from the file extension.
    ///
    /// - `.json` -> JSON format
    /// - All other extensions -> Binary format
    fn load_from_file_auto<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = infer_format_from_path(path.as_ref());
        Self::load_from_file(path, format)
    }
}

/// Blanket implementation for all types that implement Serialize + DeserializeOwned.
impl<T> Serializable for T where T: Serialize + DeserializeOwned + Sized {}

/// Infers serialization format from file extension.
fn infer_format_from_path(path: &Path) -> SerializableFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => SerializableFormat::Json,
        _ => SerializableFormat::Binary,
    }
}

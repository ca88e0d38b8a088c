//! Error types for conversion operations
//!
//! The conversions themselves are total functions and never fail; errors only
//! arise when selecting a converter by name or filename.

use std::fmt;

/// Errors that can occur when selecting converters
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Converter not found in registry
    ConverterNotFound(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ConverterNotFound(name) => write!(f, "Converter '{name}' not found"),
        }
    }
}

impl std::error::Error for ConvertError {}

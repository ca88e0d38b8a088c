//! Converter trait definition
//!
//! This module defines the core Converter trait implemented by both
//! directions of the coursemark <-> HTML pair. The trait provides a uniform
//! interface for the registry and the CLI: a converter is named after the
//! representation it produces and declares which file extensions it accepts
//! as input.

use std::collections::HashMap;

/// Trait for one direction of a representation pair
///
/// Implementors turn a source string into the target representation. There is
/// no error channel: conversions are total and degrade gracefully instead of
/// failing (malformed markup becomes paragraphs, unknown HTML tags are
/// unwrapped).
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Converter for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn convert(&self, source: &str) -> String {
///         source.to_uppercase()
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The name of the representation this converter produces
    /// (e.g., "html", "markup")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// File extensions this converter accepts as input, without the leading
    /// dot. Used for automatic direction detection from filenames.
    fn source_extensions(&self) -> &[&str] {
        &[]
    }

    /// Convert source text into the target representation
    fn convert(&self, source: &str) -> String;

    /// Convert source text, optionally honoring extra parameters.
    ///
    /// Converters without knobs can rely on the default implementation, which
    /// ignores the options and delegates to [`Converter::convert`].
    fn convert_with_options(&self, source: &str, options: &HashMap<String, String>) -> String {
        let _ = options;
        self.convert(source)
    }
}

//! Format trait definition
//!
//! This module defines the core Format trait that all output formats implement.
//! Formats are serialization-only: they turn a compiled grammar into text.

use crate::error::FormatError;
use crate::options::RenderOptions;
use bnf_parser::bnf::Grammar;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, grammar: &Grammar, options: &RenderOptions) -> Result<String, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions conventionally used for this format
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a compiled grammar
    fn serialize(&self, grammar: &Grammar, options: &RenderOptions) -> Result<String, FormatError>;
}

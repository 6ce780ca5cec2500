//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use bnf_parser::bnf::Grammar;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let html = registry.serialize(&grammar, "html", &RenderOptions::default())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a grammar using the specified format
    pub fn serialize(
        &self,
        grammar: &Grammar,
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize(grammar, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::HtmlFormat);
        registry.register(crate::formats::JsonFormat);
        registry.register(crate::formats::TagFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnf_parser::bnf::{compile_grammar, CompileOptions};

    struct CountFormat;
    impl Format for CountFormat {
        fn name(&self) -> &str {
            "count"
        }
        fn serialize(
            &self,
            grammar: &Grammar,
            _options: &RenderOptions,
        ) -> Result<String, FormatError> {
            Ok(grammar.rules.len().to_string())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.list_formats().len(), 0);
    }

    #[test]
    fn test_defaults_are_registered() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["html", "json", "tag"]);
        assert!(registry.has("html"));
    }

    #[test]
    fn test_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormat);
        let grammar = compile_grammar("[1] A ::= b\n[2] B ::= c", CompileOptions::default());

        let output = registry
            .serialize(&grammar, "count", &RenderOptions::default())
            .unwrap();
        assert_eq!(output, "2");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::default();
        let result = registry.serialize(&Grammar::default(), "pdf", &RenderOptions::default());
        assert_eq!(result, Err(FormatError::FormatNotFound("pdf".to_string())));
    }
}

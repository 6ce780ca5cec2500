//! Rendering options shared by all formats

/// Knobs for one rendering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix for every generated anchor and link target, joined with `-`
    pub namespace: Option<String>,
    /// Wrap the table in a complete HTML document
    pub standalone: bool,
    /// Document title used when `standalone` is set
    pub title: String,
    /// Heading row placed before the terminal productions
    pub terminals_heading: String,
}

impl RenderOptions {
    /// Anchor id for a symbol: `ns-symbol`, or just `symbol` without a namespace
    pub fn anchor(&self, symbol: &str) -> String {
        match self.namespace.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{}-{}", prefix, symbol),
            _ => symbol.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            namespace: None,
            standalone: false,
            title: "Grammar".to_string(),
            terminals_heading: "Productions for terminals".to_string(),
        }
    }
}

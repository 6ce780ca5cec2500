//! Diagnostic collection
//!
//! Problems found while compiling a grammar are recorded as structured values
//! instead of being printed. The library never writes to stdout or stderr; a
//! front end decides how to present them (the `bnf2html` binary prints them to
//! stderr).
//!
//! Every diagnostic carries the raw text of the rule it concerns, so it can be
//! located in the source grammar.

use super::error::RuleError;
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// A problem found in one rule
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub code: Option<String>,
    /// Raw text of the offending rule
    pub rule: Option<String>,
    pub source: String,
}

impl Diagnostic {
    pub fn new(severity: DiagnosticSeverity, message: String) -> Self {
        Self {
            severity,
            message,
            code: None,
            rule: None,
            source: "bnf-parser".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message.into())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message.into())
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl From<&RuleError> for Diagnostic {
    fn from(err: &RuleError) -> Self {
        Diagnostic::error(err.to_string())
            .with_code(err.code())
            .with_rule(err.text())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.severity, self.source)?;
        if let Some(code) = &self.code {
            write!(f, " {}", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(rule) = &self.rule {
            write!(f, " in \"{}\"", rule)?;
        }
        Ok(())
    }
}

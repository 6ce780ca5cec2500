//! Error types for lexing, expression parsing and rule compilation

use std::fmt;

/// Errors that can occur while lexing a rule body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token matches at the current position; `residual` is the unlexed text
    /// starting at the offending character.
    UnexpectedInput { residual: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedInput { residual } => {
                write!(f, "Lexing error: unrecognized input at \"{}\"", residual)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Errors that abort the parse of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    /// A `-` was not followed by a primary expression
    MissingSubtrahend { residual: String },
    /// Non-blank input left after the expression (strict parsing only)
    TrailingInput { residual: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::MissingSubtrahend { residual } => write!(
                f,
                "Syntax error: expected an expression after '-' at \"{}\"",
                residual
            ),
            ParseError::TrailingInput { residual } => {
                write!(f, "Syntax error: unexpected trailing input \"{}\"", residual)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

/// Errors that make a single rule impossible to compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule text lacks its closing `]` or its `::=` separator
    Malformed { text: String, missing: &'static str },
    /// The right-hand side failed to parse
    Expression {
        number: String,
        symbol: String,
        text: String,
        source: ParseError,
    },
}

impl RuleError {
    /// Short machine-readable code used in diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::Malformed { .. } => "malformed-rule",
            RuleError::Expression {
                source: ParseError::Lex(_),
                ..
            } => "lex-error",
            RuleError::Expression {
                source: ParseError::TrailingInput { .. },
                ..
            } => "trailing-input",
            RuleError::Expression { .. } => "syntax-error",
        }
    }

    /// The raw text of the rule that failed
    pub fn text(&self) -> &str {
        match self {
            RuleError::Malformed { text, .. } | RuleError::Expression { text, .. } => text,
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::Malformed { missing, .. } => {
                write!(f, "Malformed rule: missing '{}'", missing)
            }
            RuleError::Expression {
                number,
                symbol,
                source,
                ..
            } => write!(f, "Rule [{}] {}: {}", number, symbol, source),
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuleError::Expression { source, .. } => Some(source),
            RuleError::Malformed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_lex_error_converts_into_parse_error() {
        let err: ParseError = LexError::UnexpectedInput {
            residual: "$x".to_string(),
        }
        .into();
        assert!(matches!(err, ParseError::Lex(_)));
        assert_eq!(err.to_string(), "Lexing error: unrecognized input at \"$x\"");
    }

    #[test]
    fn test_rule_error_codes_and_source_chain() {
        let err = RuleError::Expression {
            number: "3".to_string(),
            symbol: "A".to_string(),
            text: "[3] A ::= b -".to_string(),
            source: ParseError::MissingSubtrahend {
                residual: String::new(),
            },
        };
        assert_eq!(err.code(), "syntax-error");
        assert_eq!(err.text(), "[3] A ::= b -");
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Rule [3] A: Syntax error"));

        let malformed = RuleError::Malformed {
            text: "[3 A ::= b".to_string(),
            missing: "]",
        };
        assert_eq!(malformed.code(), "malformed-rule");
        assert_eq!(malformed.to_string(), "Malformed rule: missing ']'");
    }
}

//! Rule compilation
//!
//! Turns extracted rule strings (`[12] Query ::= Prologue SelectQuery`) into
//! [`Rule`] records. A [`RuleCompiler`] owns the state of one conversion run:
//!
//! - the set of rule numbers seen so far. A repeated number is reported and the
//!   rule is renumbered `ERROR-<n>`, `n` counting collisions from 1;
//! - the terminal-section flag, switched on for good by an `@terminals` line.
//!
//! A compiler is meant to be used for exactly one run, then dropped.

use super::ast::Expr;
use super::diagnostics::Diagnostic;
use super::error::{ParseError, RuleError};
use super::extraction::extract_rules;
use super::parsing::parse_expression;
use serde::Serialize;
use std::collections::HashSet;

/// Marker line opening the terminal section
pub const TERMINALS_MARKER: &str = "@terminals";

/// Knobs for a compilation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject rules with unparsed text after the expression instead of warning
    pub strict: bool,
}

/// One compiled production
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Label from the leading bracket, or `ERROR-<n>` after a collision
    pub number: String,
    pub symbol: String,
    pub expression: Expr,
    /// Right-hand side as written, trimmed
    pub expression_text: String,
    pub is_terminal: bool,
    pub original_text: String,
}

/// Result of a whole run
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    /// Compiled rules in input order
    pub rules: Vec<Rule>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Grammar {
    /// Syntactic productions, in input order
    pub fn productions(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| !rule.is_terminal)
    }

    /// Rules from the terminal section, in input order
    pub fn terminals(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| rule.is_terminal)
    }

    /// Find the first rule defining `symbol`
    pub fn find(&self, symbol: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.symbol == symbol)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Compiler for the rules of one run
#[derive(Debug, Default)]
pub struct RuleCompiler {
    options: CompileOptions,
    seen_numbers: HashSet<String>,
    collisions: usize,
    in_terminals: bool,
    diagnostics: Vec<Diagnostic>,
}

impl RuleCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Whether an `@terminals` marker has been seen
    pub fn in_terminals(&self) -> bool {
        self.in_terminals
    }

    /// Diagnostics recorded so far (duplicates, trailing input)
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Compile one rule string.
    ///
    /// Returns `Ok(None)` for the `@terminals` marker. A duplicate rule number is
    /// not an error: it is recorded as a diagnostic and the rule is renumbered.
    pub fn compile(&mut self, text: &str) -> Result<Option<Rule>, RuleError> {
        if text == TERMINALS_MARKER {
            self.in_terminals = true;
            return Ok(None);
        }

        let (label, rest) = text.split_once(']').ok_or_else(|| malformed(text, "]"))?;
        let (symbol, body) = rest
            .split_once("::=")
            .ok_or_else(|| malformed(text, "::="))?;
        let number = label.strip_prefix('[').unwrap_or(label).trim().to_owned();
        let symbol = symbol.trim().to_owned();

        let (expression, trailing) = match parse_expression(body) {
            Ok(parsed) => parsed,
            Err(source) => return Err(expression_error(number, symbol, text, source)),
        };

        let trailing = trailing.trim();
        if !trailing.is_empty() {
            let source = ParseError::TrailingInput {
                residual: trailing.to_owned(),
            };
            if self.options.strict {
                return Err(expression_error(number, symbol, text, source));
            }
            self.diagnostics.push(
                Diagnostic::warning(format!(
                    "Rule [{}] {}: ignoring trailing input \"{}\"",
                    number, symbol, trailing
                ))
                .with_code("trailing-input")
                .with_rule(text),
            );
        }

        let number = self.claim_number(number, &symbol, text);
        Ok(Some(Rule {
            number,
            symbol,
            expression,
            expression_text: body.trim().to_owned(),
            is_terminal: self.in_terminals,
            original_text: text.to_owned(),
        }))
    }

    /// Compile every rule string, skipping the ones that fail.
    ///
    /// Failures are turned into error diagnostics so the run always produces
    /// output for every rule that could be compiled.
    pub fn compile_all<I, S>(mut self, rules: I) -> Grammar
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for text in rules {
            match self.compile(text.as_ref()) {
                Ok(Some(rule)) => compiled.push(rule),
                Ok(None) => {}
                Err(err) => self.diagnostics.push(Diagnostic::from(&err)),
            }
        }
        Grammar {
            rules: compiled,
            diagnostics: self.diagnostics,
        }
    }

    fn claim_number(&mut self, number: String, symbol: &str, text: &str) -> String {
        if !self.seen_numbers.contains(&number) {
            self.seen_numbers.insert(number.clone());
            return number;
        }
        self.collisions += 1;
        let replacement = format!("ERROR-{}", self.collisions);
        self.diagnostics.push(
            Diagnostic::error(format!(
                "Duplicate rule number [{}] for {}, renumbered {}",
                number, symbol, replacement
            ))
            .with_code("duplicate-rule-number")
            .with_rule(text),
        );
        replacement
    }
}

fn malformed(text: &str, missing: &'static str) -> RuleError {
    RuleError::Malformed {
        text: text.to_owned(),
        missing,
    }
}

fn expression_error(number: String, symbol: String, text: &str, source: ParseError) -> RuleError {
    RuleError::Expression {
        number,
        symbol,
        text: text.to_owned(),
        source,
    }
}

/// Extract and compile every rule of a grammar source in one run
pub fn compile_grammar(source: &str, options: CompileOptions) -> Grammar {
    RuleCompiler::with_options(options).compile_all(extract_rules(source))
}

//! Main module for bnf library functionality

pub mod ast;
pub mod compiling;
pub mod diagnostics;
pub mod error;
pub mod extraction;
pub mod lexing;
pub mod parsing;
pub mod token;

pub use ast::Expr;
pub use compiling::{compile_grammar, CompileOptions, Grammar, Rule, RuleCompiler};
pub use diagnostics::{Diagnostic, DiagnosticSeverity};
pub use error::{LexError, ParseError, RuleError};
pub use extraction::{extract_rules, RuleExtractor};
pub use lexing::{next_token, tokenize};
pub use parsing::{parse_complete, parse_expression};
pub use token::Token;

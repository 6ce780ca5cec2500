//! # bnf-parser
//!
//! Compiler front end for numbered EBNF grammars, the notation used by the W3C
//! recommendations (`[12] Query ::= Prologue ( SelectQuery | AskQuery )`).
//!
//! File Layout
//!
//! src/bnf
//!   ├── token        logos token definitions
//!   ├── lexing       single-token lexer over a rule body
//!   ├── ast          expression tree
//!   ├── parsing      five-level recursive descent expression parser
//!   ├── extraction   raw lines → logical rule strings
//!   ├── compiling    rule strings → numbered rules, run-scoped state
//!   ├── error        error types
//!   └── diagnostics  structured problem reports
//!
//! The pipeline is lines → [`bnf::extraction`] → [`bnf::compiling`] (which drives
//! [`bnf::parsing`]) → [`bnf::compiling::Grammar`]. Rendering lives in `bnf-babel`.

#![allow(rustdoc::invalid_html_tags)]

pub mod bnf;

//! HTML format implementation
//!
//! Strategy: direct grammar → HTML generation (one-way only)
//!
//! # Data Model
//!
//! | Grammar element | HTML                                              |
//! |-----------------|---------------------------------------------------|
//! | Rule            | `<tr id="anchor">` with number, symbol, `::=`, body cells |
//! | Identifier      | `<a href="#anchor">` to the defining row          |
//! | Terminal section| second `<tbody>` with a heading row               |
//!
//! Rule bodies are rendered by [`expression`]; rows and the surrounding table by
//! [`serializer`], both as DOM nodes written out by [`dom`]. Escaping is shared
//! through [`escape`].

pub(crate) mod dom;
pub mod escape;
pub mod expression;
pub mod serializer;

pub use escape::escape_html;
pub use expression::{render_expression, MarkupRenderer};
pub use serializer::serialize_grammar;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use bnf_parser::bnf::Grammar;

/// Cross-referenced HTML table of the grammar's rules
#[derive(Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Cross-referenced HTML table of productions"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, grammar: &Grammar, options: &RenderOptions) -> Result<String, FormatError> {
        serialize_grammar(grammar, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnf_parser::bnf::{compile_grammar, CompileOptions};

    #[test]
    fn test_html_format_name() {
        let format = HtmlFormat;
        assert_eq!(format.name(), "html");
        assert_eq!(format.file_extensions(), &["html", "htm"]);
    }

    #[test]
    fn test_html_format_serializes_every_rule() {
        let grammar = compile_grammar(
            "[1] A ::= B | C\n[2] B ::= 'b'\n[3] C ::= 'c'",
            CompileOptions::default(),
        );
        let html = HtmlFormat
            .serialize(&grammar, &RenderOptions::default())
            .unwrap();
        assert_eq!(html.matches("<tr id=").count(), 3);
    }
}

//! XML-like expression tree serialization
//!
//! Dumps every rule's expression tree, for checking how a rule body was parsed.
//!
//! ## Format
//!
//! - Node kind → tag name (`char-class`, `difference`, …)
//! - Leaf text → text content
//! - Children → nested tags (no wrapper)
//!
//! ## Example
//!
//! ```text
//! <grammar>
//!   <rule number="4" symbol="Prologue" terminal="false">
//!     <star>
//!       <alternation>
//!         <identifier>BaseDecl</identifier>
//!         <identifier>PrefixDecl</identifier>
//!       </alternation>
//!     </star>
//!   </rule>
//! </grammar>
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::escape_html;
use crate::options::RenderOptions;
use bnf_parser::bnf::{Expr, Grammar, Rule};

/// Tag serializer that converts expression trees to XML-like text
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn serialize_rule(&mut self, rule: &Rule) {
        self.push_indent(&format!(
            "<rule number=\"{}\" symbol=\"{}\" terminal=\"{}\">\n",
            escape_html(&rule.number),
            escape_html(&rule.symbol),
            rule.is_terminal
        ));
        self.indent_level += 1;
        self.serialize_expr(&rule.expression);
        self.indent_level -= 1;
        self.push_indent("</rule>\n");
    }

    fn serialize_expr(&mut self, expr: &Expr) {
        let tag = expr.kind();
        let label = match expr {
            Expr::Identifier(text)
            | Expr::Literal(text)
            | Expr::CharClass(text)
            | Expr::CharEscape(text) => escape_html(text),
            _ => String::new(),
        };

        let children = expr.children();
        self.push_indent(&format!("<{}>", tag));
        self.output.push_str(&label);

        if children.is_empty() {
            self.output.push_str(&format!("</{}>\n", tag));
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in children {
                self.serialize_expr(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>\n", tag));
        }
    }
}

/// Serialize a grammar to tag format
pub fn serialize_grammar(grammar: &Grammar) -> String {
    let mut serializer = TagSerializer::new();
    serializer.output.push_str("<grammar>\n");
    serializer.indent_level = 1;
    for rule in &grammar.rules {
        serializer.serialize_rule(rule);
    }
    serializer.output.push_str("</grammar>");
    serializer.output
}

/// Format implementation for the XML-like tree dump
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like dump of each rule's expression tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn serialize(&self, grammar: &Grammar, _options: &RenderOptions) -> Result<String, FormatError> {
        Ok(serialize_grammar(grammar))
    }
}

//! Expression tree → inline markup
//!
//! The tree carries no grouping nodes, so parentheses are re-derived while
//! walking it. Two context bits travel down the recursion:
//!
//! - `nested`: the node is an operand of a quantifier or of a sequence/alternation
//!   item, so a multi-part node has to be grouped to keep its meaning;
//! - `inside_alternation`: the node is a branch of an alternation. A sequence in
//!   that position reads unambiguously without its own parentheses.
//!
//! | Node           | Output                                                        |
//! |----------------|---------------------------------------------------------------|
//! | `Star(x)`      | `x*`, `x` nested                                              |
//! | `Plus(x)`      | `x+`, `x` nested                                              |
//! | `Optional(x)`  | `x?`, `x` nested                                              |
//! | `Identifier`   | `<a href="#anchor">name</a>`                                  |
//! | `Alternation`  | branches nested and inside alternation, ` \| `-joined, `( )` if nested |
//! | `Sequence`     | nested and not in an alternation: `( )` around unnested items; otherwise nested items, unwrapped |
//! | `Literal`      | escaped, in `'…'`, or `"…"` when the text holds a `'`         |
//! | `CharClass`    | escaped, in `[…]`                                             |
//! | `Difference`   | `a - b`, both sides unnested                                  |
//! | `CharEscape`   | escaped code                                                  |
//!
//! A grouped sequence writes its items unnested, so `Star(Sequence[Alternation[a, b], c])`
//! comes out as `(a | b c)*`.
//!
//! The output is a list of DOM nodes: `<a>` elements for identifiers and text
//! nodes (already escaped) for everything else. [`render_expression`] writes them
//! out as a string.

use super::dom::{append_all, create_element, create_text, write_nodes};
use super::escape::escape_html;
use crate::error::FormatError;
use crate::options::RenderOptions;
use bnf_parser::bnf::Expr;
use markup5ever_rcdom::Handle;

/// Render an expression at the top level of a rule body
pub fn render_expression(expr: &Expr, options: &RenderOptions) -> Result<String, FormatError> {
    write_nodes(&MarkupRenderer::new(options).render(expr))
}

/// Nodes under construction; adjacent text is merged into one text node.
#[derive(Default)]
struct Fragment {
    nodes: Vec<Handle>,
    text: String,
}

impl Fragment {
    fn push_str(&mut self, escaped: &str) {
        self.text.push_str(escaped);
    }

    fn push_node(&mut self, node: Handle) {
        self.flush_text();
        self.nodes.push(node);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.nodes.push(create_text(&self.text));
            self.text.clear();
        }
    }

    fn finish(mut self) -> Vec<Handle> {
        self.flush_text();
        self.nodes
    }
}

/// Walks an expression tree and produces inline markup nodes
pub struct MarkupRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> MarkupRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, expr: &Expr) -> Vec<Handle> {
        let mut fragment = Fragment::default();
        self.render_in(expr, false, false, &mut fragment);
        fragment.finish()
    }

    fn render_in(&self, expr: &Expr, nested: bool, inside_alternation: bool, out: &mut Fragment) {
        match expr {
            Expr::Star(inner) => {
                self.render_in(inner, true, false, out);
                out.push_str("*");
            }
            Expr::Plus(inner) => {
                self.render_in(inner, true, false, out);
                out.push_str("+");
            }
            Expr::Optional(inner) => {
                self.render_in(inner, true, false, out);
                out.push_str("?");
            }
            Expr::Identifier(name) => {
                let href = format!("#{}", escape_html(&self.options.anchor(name)));
                let link = create_element("a", vec![("href", href.as_str())]);
                append_all(&link, [create_text(&escape_html(name))]);
                out.push_node(link);
            }
            Expr::Alternation(branches) => {
                if nested {
                    out.push_str("(");
                }
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" | ");
                    }
                    self.render_in(branch, true, true, out);
                }
                if nested {
                    out.push_str(")");
                }
            }
            Expr::Sequence(items) => {
                if nested && !inside_alternation {
                    out.push_str("(");
                    self.join_items(items, false, out);
                    out.push_str(")");
                } else {
                    self.join_items(items, true, out);
                }
            }
            Expr::Literal(text) => {
                let quote = if text.contains('\'') { "\"" } else { "'" };
                out.push_str(quote);
                out.push_str(&escape_html(text));
                out.push_str(quote);
            }
            Expr::CharClass(chars) => {
                out.push_str("[");
                out.push_str(&escape_html(chars));
                out.push_str("]");
            }
            Expr::Difference(minuend, subtrahend) => {
                self.render_in(minuend, false, false, out);
                out.push_str(" - ");
                self.render_in(subtrahend, false, false, out);
            }
            Expr::CharEscape(code) => out.push_str(&escape_html(code)),
        }
    }

    fn join_items(&self, items: &[Expr], nested: bool, out: &mut Fragment) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(" ");
            }
            self.render_in(item, nested, false, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(expr: &Expr) -> String {
        render_expression(expr, &RenderOptions::default()).unwrap()
    }

    fn id(name: &str) -> Expr {
        Expr::identifier(name)
    }

    #[test]
    fn test_identifier_links_to_its_rule() {
        assert_eq!(render(&id("Query")), r##"<a href="#Query">Query</a>"##);
        let options = RenderOptions::default().with_namespace("sparql");
        assert_eq!(
            render_expression(&id("Query"), &options).unwrap(),
            r##"<a href="#sparql-Query">Query</a>"##
        );
    }

    #[test]
    fn test_literal_quoting() {
        assert_eq!(render(&Expr::literal("abc")), "'abc'");
        assert_eq!(render(&Expr::literal("don't")), "\"don&#x27;t\"");
        assert_eq!(render(&Expr::literal("a\"b")), "'a&quot;b'");
        assert_eq!(render(&Expr::literal("<=")), "'&lt;='");
    }

    #[test]
    fn test_char_class_and_escape() {
        assert_eq!(render(&Expr::CharClass("^<>".to_string())), "[^&lt;&gt;]");
        assert_eq!(render(&Expr::CharEscape("#x20".to_string())), "#x20");
    }

    #[test]
    fn test_top_level_alternation_is_unwrapped() {
        let expr = Expr::Alternation(vec![Expr::literal("a"), Expr::literal("b")]);
        assert_eq!(render(&expr), "'a' | 'b'");
    }

    #[test]
    fn test_quantified_alternation_is_wrapped() {
        let expr = Expr::star(Expr::Alternation(vec![Expr::literal("a"), Expr::literal("b")]));
        assert_eq!(render(&expr), "('a' | 'b')*");
    }

    #[test]
    fn test_quantified_sequence_is_wrapped() {
        let expr = Expr::plus(Expr::Sequence(vec![Expr::literal(","), Expr::literal("x")]));
        assert_eq!(render(&expr), "(',' 'x')+");
    }

    #[test]
    fn test_quantified_sequence_items_are_unnested() {
        let expr = Expr::star(Expr::Sequence(vec![
            Expr::Alternation(vec![id("a"), id("b")]),
            id("c"),
        ]));
        assert_eq!(
            render(&expr),
            r##"(<a href="#a">a</a> | <a href="#b">b</a> <a href="#c">c</a>)*"##
        );

        let expr = Expr::optional(Expr::Sequence(vec![
            Expr::Sequence(vec![Expr::literal("x"), Expr::literal("y")]),
            Expr::literal("z"),
        ]));
        assert_eq!(render(&expr), "('x' 'y' 'z')?");
    }

    #[test]
    fn test_renderer_merges_text_between_links() {
        let expr = Expr::Sequence(vec![Expr::literal("("), id("Var"), Expr::literal(")")]);
        let nodes = MarkupRenderer::new(&RenderOptions::default()).render(&expr);
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn test_sequence_branch_is_not_wrapped() {
        let expr = Expr::Alternation(vec![
            Expr::literal("a"),
            Expr::Sequence(vec![Expr::literal("b"), Expr::literal("c")]),
        ]);
        assert_eq!(render(&expr), "'a' | 'b' 'c'");
    }

    #[test]
    fn test_alternation_inside_sequence_is_wrapped() {
        let expr = Expr::Sequence(vec![
            Expr::Alternation(vec![Expr::literal("a"), Expr::literal("b")]),
            Expr::literal("c"),
        ]);
        assert_eq!(render(&expr), "('a' | 'b') 'c'");
    }

    #[test]
    fn test_nested_alternation_is_wrapped() {
        let expr = Expr::Alternation(vec![
            Expr::literal("a"),
            Expr::Alternation(vec![Expr::literal("b"), Expr::literal("c")]),
        ]);
        assert_eq!(render(&expr), "'a' | ('b' | 'c')");
    }

    #[test]
    fn test_empty_sequence_depends_on_context() {
        let in_alternation = Expr::Alternation(vec![Expr::empty(), Expr::literal("x")]);
        assert_eq!(render(&in_alternation), " | 'x'");
        assert_eq!(render(&Expr::star(Expr::empty())), "()*");
        assert_eq!(render(&Expr::optional(Expr::empty())), "()?");
        assert_eq!(render(&Expr::empty()), "");
    }

    #[test]
    fn test_difference_sides_are_unnested() {
        let expr = Expr::difference(
            Expr::CharClass("^\"".to_string()),
            Expr::CharEscape("#x5C".to_string()),
        );
        assert_eq!(render(&expr), "[^&quot;] - #x5C");
    }
}

//! Expression tree for rule right-hand sides
//!
//! The parser only builds canonical trees: an [`Expr::Alternation`] always has at
//! least two branches and an [`Expr::Sequence`] never has exactly one element.
//! The empty sequence is the only way to spell "nothing" (an empty branch of an
//! alternation, or `()`).

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expr {
    /// Reference to another rule's symbol
    Identifier(String),
    /// Quoted terminal string, without its quotes
    Literal(String),
    /// Bracketed character set, stored verbatim without the brackets
    CharClass(String),
    /// `#xN` character code, `#` included
    CharEscape(String),
    Sequence(Vec<Expr>),
    Alternation(Vec<Expr>),
    Optional(Box<Expr>),
    Star(Box<Expr>),
    Plus(Box<Expr>),
    /// `minuend - subtrahend`
    Difference(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// The empty sequence
    pub fn empty() -> Self {
        Expr::Sequence(Vec::new())
    }

    /// Build a sequence, collapsing a single element to itself.
    pub fn sequence(mut items: Vec<Expr>) -> Self {
        if items.len() == 1 {
            items.remove(0)
        } else {
            Expr::Sequence(items)
        }
    }

    /// Build an alternation, collapsing a single branch to itself.
    ///
    /// `branches` must not be empty.
    pub fn alternation(mut branches: Vec<Expr>) -> Self {
        debug_assert!(!branches.is_empty(), "alternation needs at least one branch");
        if branches.len() == 1 {
            branches.remove(0)
        } else {
            Expr::Alternation(branches)
        }
    }

    pub fn optional(inner: Expr) -> Self {
        Expr::Optional(Box::new(inner))
    }

    pub fn star(inner: Expr) -> Self {
        Expr::Star(Box::new(inner))
    }

    pub fn plus(inner: Expr) -> Self {
        Expr::Plus(Box::new(inner))
    }

    pub fn difference(minuend: Expr, subtrahend: Expr) -> Self {
        Expr::Difference(Box::new(minuend), Box::new(subtrahend))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Expr::Literal(text.into())
    }

    /// Check if this is the empty sequence
    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::Sequence(items) if items.is_empty())
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expr::Identifier(_) | Expr::Literal(_) | Expr::CharClass(_) | Expr::CharEscape(_)
        )
    }

    /// Node kind as used by the tree serializers (e.g. `char-class`)
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Identifier(_) => "identifier",
            Expr::Literal(_) => "literal",
            Expr::CharClass(_) => "char-class",
            Expr::CharEscape(_) => "char-escape",
            Expr::Sequence(_) => "sequence",
            Expr::Alternation(_) => "alternation",
            Expr::Optional(_) => "optional",
            Expr::Star(_) => "star",
            Expr::Plus(_) => "plus",
            Expr::Difference(_, _) => "difference",
        }
    }

    /// Direct children, in order
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Sequence(items) | Expr::Alternation(items) => items.iter().collect(),
            Expr::Optional(inner) | Expr::Star(inner) | Expr::Plus(inner) => vec![inner.as_ref()],
            Expr::Difference(minuend, subtrahend) => vec![minuend.as_ref(), subtrahend.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Names of all rules referenced from this expression, in order of appearance
    pub fn referenced_symbols(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_symbols(&mut names);
        names
    }

    fn collect_symbols<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expr::Identifier(name) => names.push(name),
            other => {
                for child in other.children() {
                    child.collect_symbols(names);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_collapses_single_item() {
        assert_eq!(
            Expr::sequence(vec![Expr::identifier("a")]),
            Expr::identifier("a")
        );
        assert!(Expr::sequence(vec![]).is_empty());
    }

    #[test]
    fn test_alternation_collapses_single_branch() {
        assert_eq!(Expr::alternation(vec![Expr::empty()]), Expr::empty());
        assert!(matches!(
            Expr::alternation(vec![Expr::identifier("a"), Expr::identifier("b")]),
            Expr::Alternation(branches) if branches.len() == 2
        ));
    }

    #[test]
    fn test_referenced_symbols() {
        let expr = Expr::sequence(vec![
            Expr::identifier("a"),
            Expr::star(Expr::alternation(vec![
                Expr::literal(","),
                Expr::difference(Expr::identifier("b"), Expr::identifier("c")),
            ])),
        ]);
        assert_eq!(expr.referenced_symbols(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_kinds_follow_tree_shape() {
        let expr = Expr::optional(Expr::difference(
            Expr::identifier("a"),
            Expr::CharClass("b".to_string()),
        ));
        assert_eq!(shape(&expr), "optional(difference(identifier,char-class))");
    }

    fn shape(expr: &Expr) -> String {
        let children: Vec<String> = expr.children().into_iter().map(shape).collect();
        if children.is_empty() {
            expr.kind().to_string()
        } else {
            format!("{}({})", expr.kind(), children.join(","))
        }
    }
}

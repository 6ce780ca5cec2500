//! Expression parser tests
//!
//! Trees are compared through a compact s-expression rendering so each case
//! fits on one line: `(seq ..)`, `(alt ..)`, `(? x)`, `(* x)`, `(+ x)`, `(- a b)`.

use bnf_parser::bnf::{parse_expression, Expr, ParseError};
use rstest::rstest;

fn sexpr(expr: &Expr) -> String {
    let list = |head: &str, items: &[Expr]| {
        let mut parts = vec![head.to_string()];
        parts.extend(items.iter().map(sexpr));
        format!("({})", parts.join(" "))
    };
    match expr {
        Expr::Identifier(name) => name.clone(),
        Expr::Literal(text) if text.contains('\'') => format!("\"{}\"", text),
        Expr::Literal(text) => format!("'{}'", text),
        Expr::CharClass(chars) => format!("[{}]", chars),
        Expr::CharEscape(code) => code.clone(),
        Expr::Sequence(items) => list("seq", items),
        Expr::Alternation(branches) => list("alt", branches),
        Expr::Optional(inner) => format!("(? {})", sexpr(inner)),
        Expr::Star(inner) => format!("(* {})", sexpr(inner)),
        Expr::Plus(inner) => format!("(+ {})", sexpr(inner)),
        Expr::Difference(minuend, subtrahend) => {
            format!("(- {} {})", sexpr(minuend), sexpr(subtrahend))
        }
    }
}

#[rstest]
#[case("a b c", "(seq a b c)")]
#[case("a? b+ c*", "(seq (? a) (+ b) (* c))")]
#[case("a | (b - c)", "(alt a (- b c))")]
#[case("| x xlist", "(alt (seq) (seq x xlist))")]
#[case("a |", "(alt a (seq))")]
#[case("a | b c | d", "(alt a (seq b c) d)")]
#[case("(a | b)+", "(+ (alt a b))")]
#[case("((a))", "a")]
#[case("( a b )?", "(? (seq a b))")]
#[case("'x' | \"y'z\"", "(alt 'x' \"y'z\")")]
#[case("#x9 | #xA | #xD", "(alt #x9 #xA #xD)")]
#[case("[a-z]* - 'q'", "(- (* [a-z]) 'q')")]
#[case("A - (B | C) D", "(seq (- A (alt B C)) D)")]
#[case("()*", "(* (seq))")]
#[case("", "(seq)")]
fn test_expression_trees(#[case] input: &str, #[case] expected: &str) {
    let (expr, rest) = parse_expression(input).expect("expression to parse");
    assert_eq!(sexpr(&expr), expected);
    assert!(rest.trim().is_empty(), "unexpected remainder {:?}", rest);
}

#[rstest]
#[case("a) b c", "a", " b c")]
#[case("a b ) | c", "(seq a b)", " | c")]
#[case("a - b - c", "(- a b)", " - c")]
#[case("a @pass", "a", " @pass")]
fn test_partial_consumption(#[case] input: &str, #[case] expected: &str, #[case] rest: &str) {
    let (expr, remainder) = parse_expression(input).expect("expression to parse");
    assert_eq!(sexpr(&expr), expected);
    assert_eq!(remainder, rest);
}

#[rstest]
#[case("a -")]
#[case("a - )")]
#[case("a - * b")]
#[case("(a - | b)")]
fn test_missing_subtrahend(#[case] input: &str) {
    assert!(matches!(
        parse_expression(input),
        Err(ParseError::MissingSubtrahend { .. })
    ));
}

#[rstest]
#[case("a % b")]
#[case("'unterminated")]
#[case("a | 1b")]
fn test_lex_errors_abort_the_parse(#[case] input: &str) {
    assert!(matches!(parse_expression(input), Err(ParseError::Lex(_))));
}

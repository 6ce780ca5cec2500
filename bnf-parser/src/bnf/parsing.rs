//! Recursive descent expression parser
//!
//! Grammar of a rule body, loosest binding first:
//!
//! ```text
//! expression  = alternation [ ")" ]
//! alternation = sequence { "|" sequence }
//! sequence    = { difference }
//! difference  = postfix [ "-" primary ]
//! postfix     = primary [ "?" | "*" | "+" ]
//! primary     = Identifier | Literal | CharClass | CharEscape | "(" expression
//! ```
//!
//! Every level hands back the unconsumed remainder of its input. The inner levels
//! distinguish three outcomes: a match (`Ok(Some(..))`), a clean no-match that lets
//! the caller stop or try an empty branch (`Ok(None)`), and a fatal error. A
//! sequence ends at the first no-match, which is how `|`, `)` and end of input
//! terminate it without any lookahead beyond one token.
//!
//! A group's closing paren is consumed by the [`parse_expression`] call nested
//! inside it, not by the primary that saw `(`. An unclosed group is therefore
//! accepted, and a stray `)` at the top level ends the expression.

use super::ast::Expr;
use super::error::ParseError;
use super::lexing::next_token;
use super::token::Token;

/// Outcome of the levels that may decline to match
type Parsed<'a> = Result<Option<(Expr, &'a str)>, ParseError>;

/// Parse an expression, returning the tree and whatever input it did not consume.
///
/// Full consumption is not required: a top-level `)` is consumed and everything
/// after it is returned verbatim.
pub fn parse_expression(input: &str) -> Result<(Expr, &str), ParseError> {
    let (expr, rest) = alternation(input)?;
    match next_token(rest)? {
        Some((Token::CloseParen, after)) => Ok((expr, after)),
        _ => Ok((expr, rest)),
    }
}

/// Parse an expression that must span the whole input.
pub fn parse_complete(input: &str) -> Result<Expr, ParseError> {
    let (expr, rest) = parse_expression(input)?;
    if rest.trim().is_empty() {
        Ok(expr)
    } else {
        Err(ParseError::TrailingInput {
            residual: rest.trim().to_owned(),
        })
    }
}

fn alternation(input: &str) -> Result<(Expr, &str), ParseError> {
    let (first, mut rest) = sequence(input)?;
    let mut branches = vec![first];
    while let Some((Token::Pipe, after)) = next_token(rest)? {
        let (branch, remainder) = sequence(after)?;
        branches.push(branch);
        rest = remainder;
    }
    Ok((Expr::alternation(branches), rest))
}

fn sequence(input: &str) -> Result<(Expr, &str), ParseError> {
    let mut items = Vec::new();
    let mut rest = input;
    while let Some((item, remainder)) = difference(rest)? {
        items.push(item);
        rest = remainder;
    }
    Ok((Expr::sequence(items), rest))
}

fn difference(input: &str) -> Parsed<'_> {
    let Some((minuend, rest)) = postfix(input)? else {
        return Ok(None);
    };
    match next_token(rest)? {
        // The subtrahend is a bare primary, never quantified.
        Some((Token::Minus, after)) => match primary(after)? {
            Some((subtrahend, remainder)) => {
                Ok(Some((Expr::difference(minuend, subtrahend), remainder)))
            }
            None => Err(ParseError::MissingSubtrahend {
                residual: after.trim().to_owned(),
            }),
        },
        _ => Ok(Some((minuend, rest))),
    }
}

fn postfix(input: &str) -> Parsed<'_> {
    let Some((operand, rest)) = primary(input)? else {
        return Ok(None);
    };
    let quantified = match next_token(rest)? {
        Some((Token::Question, after)) => (Expr::optional(operand), after),
        Some((Token::Star, after)) => (Expr::star(operand), after),
        Some((Token::Plus, after)) => (Expr::plus(operand), after),
        _ => (operand, rest),
    };
    Ok(Some(quantified))
}

fn primary(input: &str) -> Parsed<'_> {
    let Some((token, rest)) = next_token(input)? else {
        return Ok(None);
    };
    let leaf = match token {
        Token::Identifier(name) => Expr::Identifier(name),
        Token::Literal(text) => Expr::Literal(text),
        Token::CharClass(chars) => Expr::CharClass(chars),
        Token::CharEscape(code) => Expr::CharEscape(code),
        Token::OpenParen => return parse_expression(rest).map(Some),
        _ => return Ok(None),
    };
    Ok(Some((leaf, rest)))
}

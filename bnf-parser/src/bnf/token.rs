//! Token definitions for rule bodies
//!
//! This module defines all the tokens that can appear on the right-hand side of a
//! grammar rule. The tokens are defined using the logos derive macro; whitespace is
//! a skip pattern, so every token is implicitly preceded by optional whitespace.
//!
//! Whitespace is Unicode whitespace (a no-break space separates tokens like a
//! plain space does), matching the `str::trim` used on rule text. Word characters
//! are ASCII only (`[A-Za-z0-9_]`).
use logos::{Lexer, Logos};
use std::fmt;

/// All possible tokens in a rule body
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// `'...'` or `"..."`, the content between the quotes. No escapes: the first
    /// matching quote closes the literal.
    #[regex(r"'[^']*'", delimited)]
    #[regex(r#""[^"]*""#, delimited)]
    Literal(String),

    /// `[...]`, the content up to the first `]`, kept verbatim
    #[regex(r"\[[^\]]*\]", delimited)]
    CharClass(String),

    /// `#xN`, the `#` included
    #[regex(r"#[A-Za-z0-9_]+", |lex| lex.slice().to_owned())]
    CharEscape(String),

    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),

    /// `@name` annotation marker, the `@` stripped
    #[regex(r"@[A-Za-z0-9_]+", |lex| lex.slice()[1..].to_owned())]
    At(String),

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("|")]
    Pipe,
    #[token("-")]
    Minus,
}

/// Strip the one-byte delimiters around a quoted literal or a character class.
fn delimited(lex: &mut Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_owned()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) if text.contains('\'') => write!(f, "\"{}\"", text),
            Token::Literal(text) => write!(f, "'{}'", text),
            Token::CharClass(chars) => write!(f, "[{}]", chars),
            Token::CharEscape(code) => write!(f, "{}", code),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::At(name) => write!(f, "@{}", name),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Question => write!(f, "?"),
            Token::Star => write!(f, "*"),
            Token::Plus => write!(f, "+"),
            Token::Pipe => write!(f, "|"),
            Token::Minus => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lex_all("( ) ? * + | -"),
            vec![
                Ok(Token::OpenParen),
                Ok(Token::CloseParen),
                Ok(Token::Question),
                Ok(Token::Star),
                Ok(Token::Plus),
                Ok(Token::Pipe),
                Ok(Token::Minus),
            ]
        );
    }

    #[test]
    fn test_literals_keep_inner_text() {
        assert_eq!(
            lex_all(r#"'a"b' "don't""#),
            vec![
                Ok(Token::Literal("a\"b".to_string())),
                Ok(Token::Literal("don't".to_string())),
            ]
        );
    }

    #[test]
    fn test_char_class_is_verbatim() {
        assert_eq!(
            lex_all("[^#x5C#x22 a-z]"),
            vec![Ok(Token::CharClass("^#x5C#x22 a-z".to_string()))]
        );
    }

    #[test]
    fn test_escape_identifier_and_at() {
        assert_eq!(
            lex_all("#x20 VARNAME_2 @terminals"),
            vec![
                Ok(Token::CharEscape("#x20".to_string())),
                Ok(Token::Identifier("VARNAME_2".to_string())),
                Ok(Token::At("terminals".to_string())),
            ]
        );
    }

    #[test]
    fn test_identifier_cannot_start_with_digit() {
        let tokens = lex_all("1abc");
        assert!(tokens[0].is_err());
    }

    #[test]
    fn test_unicode_whitespace_separates_tokens() {
        assert_eq!(
            lex_all("a\u{a0}b\u{2003}|\u{3000}'c'"),
            vec![
                Ok(Token::Identifier("a".to_string())),
                Ok(Token::Identifier("b".to_string())),
                Ok(Token::Pipe),
                Ok(Token::Literal("c".to_string())),
            ]
        );
    }

    #[test]
    fn test_display_reproduces_source_form() {
        assert_eq!(Token::Literal("don't".into()).to_string(), "\"don't\"");
        assert_eq!(Token::Literal("abc".into()).to_string(), "'abc'");
        assert_eq!(Token::CharClass("a-z".into()).to_string(), "[a-z]");
        assert_eq!(Token::At("pass".into()).to_string(), "@pass");
    }
}

//! Single-token lexer
//!
//! The expression parser never looks more than one token ahead, so the lexer
//! exposes exactly that: [`next_token`] classifies the token at the front of a
//! residual string and hands back the unconsumed remainder. The remainder is a
//! slice of the input, so walking a rule body is linear in its length.

use super::error::LexError;
use super::token::Token;
use logos::Logos;

/// Lex the next token of `input`.
///
/// Returns `Ok(None)` when only whitespace is left. On unrecognized input the
/// error carries the residual text starting at the offending character.
pub fn next_token(input: &str) -> Result<Option<(Token, &str)>, LexError> {
    let mut lexer = Token::lexer(input);
    match lexer.next() {
        None => Ok(None),
        Some(Ok(token)) => Ok(Some((token, lexer.remainder()))),
        Some(Err(())) => Err(LexError::UnexpectedInput {
            residual: input[lexer.span().start..].to_owned(),
        }),
    }
}

/// Convenience function to tokenize a whole rule body
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while let Some((token, remainder)) = next_token(rest)? {
        tokens.push(token);
        rest = remainder;
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_token_returns_remainder() {
        let (token, rest) = next_token("  Foo bar").unwrap().unwrap();
        assert_eq!(token, Token::Identifier("Foo".to_string()));
        assert_eq!(rest, " bar");
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(next_token(""), Ok(None));
        assert_eq!(next_token(" \t "), Ok(None));
        assert_eq!(next_token("\u{a0}\n"), Ok(None));
    }

    #[test]
    fn test_no_break_space_before_token() {
        let (token, rest) = next_token("\u{a0}Foo\u{a0}bar").unwrap().unwrap();
        assert_eq!(token, Token::Identifier("Foo".to_string()));
        assert_eq!(rest, "\u{a0}bar");
    }

    #[test]
    fn test_remainder_after_close_paren_is_verbatim() {
        let (token, rest) = next_token(") b c").unwrap().unwrap();
        assert_eq!(token, Token::CloseParen);
        assert_eq!(rest, " b c");
    }

    #[test]
    fn test_unrecognized_input_reports_residual() {
        let err = next_token("  $foo bar").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedInput {
                residual: "$foo bar".to_string()
            }
        );
    }

    #[test]
    fn test_unterminated_literal_is_an_error() {
        assert!(next_token("'abc").is_err());
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("a? ('b' | [c])").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("a".to_string()),
                Token::Question,
                Token::OpenParen,
                Token::Literal("b".to_string()),
                Token::Pipe,
                Token::CharClass("c".to_string()),
                Token::CloseParen,
            ]
        );
    }
}

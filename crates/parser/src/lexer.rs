//! Logos-based lexer for the schedule syntax.
//!
//! The input is cut into maximal runs of operation characters (`A-Z`,
//! `0-9`, `(`, `)`) and maximal runs of everything else. Each run of
//! operation characters is one operation token; the runs in between are
//! separators and carry no meaning.
//!
//! # Example input
//!
//! ```text
//! R1(A), W2(A) C1;C2
//! ```

use std::ops::Range;

/// All token kinds produced by the schedule lexer.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(::logos::Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A candidate operation such as `R1(A)` or `C2`. Not yet validated.
    #[regex(r"[A-Z()0-9]+")]
    Chunk,

    /// Anything between two operations: commas, whitespace, lower-case
    /// letters, punctuation.
    #[regex(r"[^A-Z()0-9]+")]
    Separator,
}

/// A single token with its kind and the byte-offset span in the source.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range `start..end` into the original input string.
    pub span: Range<usize>,
}

impl Token {
    /// Construct a new [`Token`].
    #[must_use]
    pub const fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Return the source text for this token given the original input.
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Tokenize `input` and return all tokens.
///
/// Use [`tokenize_with_text`] if you also need the source slice for each token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|kind| Token { kind, span }))
        .collect()
}

/// Tokenize `input` and return tokens paired with their source text slices.
#[must_use]
pub fn tokenize_with_text(input: &str) -> Vec<(Token, &str)> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| {
            result.ok().map(|kind| {
                let text = &input[span.clone()];
                (Token { kind, span }, text)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{tokenize, tokenize_with_text, TokenKind};

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_comma_separated() {
        let input = "R2(A),C1,W3(A)";
        let pairs = tokenize_with_text(input);
        let texts: Vec<&str> = pairs.iter().map(|(_, s)| *s).collect();
        assert_eq!(texts, &["R2(A)", ",", "C1", ",", "W3(A)"]);
        assert_eq!(
            kinds(input),
            [
                TokenKind::Chunk,
                TokenKind::Separator,
                TokenKind::Chunk,
                TokenKind::Separator,
                TokenKind::Chunk,
            ]
        );
    }

    #[test]
    fn test_any_non_operation_run_separates() {
        let input = "R1(X)  W2(X);\tw1 C1\n";
        let chunks: Vec<&str> = tokenize_with_text(input)
            .into_iter()
            .filter(|(t, _)| t.kind == TokenKind::Chunk)
            .map(|(_, s)| s)
            .collect();
        assert_eq!(chunks, &["R1(X)", "W2(X)", "1", "C1"]);
    }

    #[test]
    fn test_malformed_chunk_is_still_one_token() {
        // Validation happens in the parser, not the lexer.
        let pairs = tokenize_with_text("RB(A)");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.kind, TokenKind::Chunk);
        assert_eq!(pairs[0].1, "RB(A)");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_span_correctness() {
        let input = "C1, W2(AB)";
        let tokens = tokenize(input);
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[1].span, 2..4);
        assert_eq!(tokens[2].span, 4..10);
        assert_eq!(tokens[2].text(input), "W2(AB)");
    }
}

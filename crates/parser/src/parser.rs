//! Winnow-based parser for the schedule syntax.
//!
//! Grammar of one operation token (produced by the lexer):
//! ```text
//! operation   = kind transaction resource?
//! kind        = "R" | "W" | "C"
//! transaction = DIGIT+
//! resource    = "(" UPPER+ ")"
//! ```
//!
//! Reads and writes must carry a resource; commits must not.

use txsched_core::schedule::{OpKind, Operation, Schedule};
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, eof, opt};
use winnow::prelude::*;
use winnow::token::take_while;
use winnow::ModalResult;

use crate::lexer::{tokenize_with_text, TokenKind};

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Why an operation token was rejected.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token does not match the operation grammar at all.
    Malformed,
    /// A read or write without a parenthesized resource.
    MissingResource,
    /// A commit with a parenthesized resource.
    UnexpectedResource,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Malformed => "could not parse this as an operation",
            Self::MissingResource => "read/write operations require a resource argument",
            Self::UnexpectedResource => "commit operations do not take arguments",
        }
    }
}

/// A rejected operation token and where it starts in the input.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub token: String,
    pub kind: ParseErrorKind,
    /// Byte offset of the token in the parsed input.
    pub offset: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "'{}': {}", self.token, self.kind.message())
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse a whole schedule.
///
/// Every operation token must be valid; the first invalid one aborts the
/// parse. Input without any operation token (including the empty string)
/// yields the empty schedule.
///
/// # Errors
///
/// Returns a [`ParseError`] for the first token that is not a valid
/// operation.
pub fn parse_schedule(input: &str) -> Result<Schedule<String, String>, ParseError> {
    let mut schedule = Schedule::new();
    for (token, text) in tokenize_with_text(input) {
        if token.kind == TokenKind::Chunk {
            schedule.append(operation_at(text, token.span.start)?);
        }
    }
    Ok(schedule)
}

/// Parse a single operation such as `R1(A)` or `C2`.
///
/// # Errors
///
/// Returns a [`ParseError`] at offset 0 if `token` is not a valid operation.
pub fn parse_operation(token: &str) -> Result<Operation<String, String>, ParseError> {
    operation_at(token, 0)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

fn kind(input: &mut &str) -> ModalResult<OpKind> {
    alt((
        'R'.value(OpKind::Read),
        'W'.value(OpKind::Write),
        'C'.value(OpKind::Commit),
    ))
    .parse_next(input)
}

/// Transaction ids keep their digits verbatim, so `R01(A)` and `R1(A)` name
/// different transactions.
fn transaction(input: &mut &str) -> ModalResult<String> {
    digit1.map(|s: &str| s.to_string()).parse_next(input)
}

fn resource(input: &mut &str) -> ModalResult<String> {
    delimited('(', take_while(1.., |c: char| c.is_ascii_uppercase()), ')')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// `kind transaction resource?` spanning the whole token.
fn raw_operation(input: &mut &str) -> ModalResult<(OpKind, String, Option<String>)> {
    let op_kind = kind.parse_next(input)?;
    let txn = transaction.parse_next(input)?;
    let res = opt(resource).parse_next(input)?;
    eof.parse_next(input)?;
    Ok((op_kind, txn, res))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn operation_at(token: &str, offset: usize) -> Result<Operation<String, String>, ParseError> {
    let error = |kind| ParseError {
        token: token.to_string(),
        kind,
        offset,
    };

    let mut stream = token;
    let (op_kind, txn, res) = raw_operation
        .parse_next(&mut stream)
        .map_err(|_| error(ParseErrorKind::Malformed))?;

    match (op_kind, res) {
        (OpKind::Read, Some(res)) => Ok(Operation::read(txn, res)),
        (OpKind::Write, Some(res)) => Ok(Operation::write(txn, res)),
        (OpKind::Commit, None) => Ok(Operation::commit(txn)),
        (OpKind::Read | OpKind::Write, None) => Err(error(ParseErrorKind::MissingResource)),
        (OpKind::Commit, Some(_)) => Err(error(ParseErrorKind::UnexpectedResource)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

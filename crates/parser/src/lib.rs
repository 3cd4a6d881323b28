//! Text syntax for transaction schedules.
//!
//! An operation is a kind letter, a transaction number and, for reads and
//! writes, a parenthesized upper-case resource: `R1(A)`, `W2(B)`, `C1`.
//! Operations are separated by any run of characters other than `A-Z`,
//! `0-9`, `(` and `)`, so `R1(A),W2(A) C1;C2` is a valid schedule.

pub mod lexer;
pub mod parser;

pub use lexer::{tokenize, tokenize_with_text, Token, TokenKind};
pub use parser::{parse_operation, parse_schedule, ParseError, ParseErrorKind};

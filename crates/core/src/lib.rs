//! Static analysis of transaction schedules.
//!
//! `txsched_core` takes a complete, already-recorded schedule (an interleaved
//! sequence of read, write and commit operations issued by concurrent
//! transactions) and decides which classical concurrency-control properties
//! it satisfies:
//!
//! 1. **Conflict serializability** -- the precedence graph built from every
//!    conflicting pair of operations is acyclic.
//! 2. **Recoverability** -- a transaction commits only after every
//!    transaction whose uncommitted writes it read has committed.
//! 3. **Cascadelessness (ACA)** -- no transaction ever reads another
//!    transaction's uncommitted write.
//! 4. **Strictness** -- no transaction reads or overwrites another
//!    transaction's write before that transaction commits.
//!
//! The last three form a hierarchy: every strict schedule is cascadeless and
//! every cascadeless schedule is recoverable.
//!
//! # Entry points
//!
//! [`check()`] verifies one [`Property`] and returns an
//! [`Error`](analysis::error::Error) describing the first violation.
//! [`analyze()`] evaluates all four properties at once. The boolean
//! predicates (`is_recoverable`, ...) live in [`analysis`].
//!
//! ```rust,ignore
//! use txsched_core::schedule::{Operation, Schedule};
//! use txsched_core::{check, Property};
//!
//! let schedule: Schedule<u64, char> = [
//!     Operation::write(1, 'A'),
//!     Operation::read(2, 'A'),
//!     Operation::commit(1),
//!     Operation::commit(2),
//! ]
//! .into_iter()
//! .collect();
//!
//! match check(&schedule, Property::Cascadeless) {
//!     Ok(()) => println!("cascadeless"),
//!     Err(err) => println!("violation: {err:?}"),
//! }
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on the schedule
//!   model, the conflict graph, [`Property`], [`Analysis`] and the error type.
//!
//! This crate is `no_std` compatible (requires `alloc`). The textual syntax
//! lives in the separate `txsched_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod analysis;
pub mod conflict;
pub mod graph;
pub mod schedule;

pub use analysis::{analyze, check, Analysis, Property};
pub use conflict::graph::{build_conflict_graph, ConflictGraph};
pub use conflict::{conflicts, ConflictPair};
pub use schedule::{OpKind, Operation, Schedule};

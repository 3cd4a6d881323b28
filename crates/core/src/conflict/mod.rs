//! Pairwise conflicts between the operations of a schedule.

use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result};

use crate::schedule::{Operation, Schedule};

pub mod graph;

/// An operation together with its position in the schedule.
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[derive(Debug, PartialEq, Eq)]
pub struct Step<'a, Txn, Resource> {
    pub position: usize,
    pub operation: &'a Operation<Txn, Resource>,
}

/// Two conflicting operations, `earlier` strictly before `later`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[derive(Debug, PartialEq, Eq)]
pub struct ConflictPair<'a, Txn, Resource> {
    pub earlier: Step<'a, Txn, Resource>,
    pub later: Step<'a, Txn, Resource>,
}

impl<Txn, Resource> Display for ConflictPair<'_, Txn, Resource>
where
    Txn: Display,
    Resource: Display,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} -> {}", self.earlier.operation, self.later.operation)
    }
}

/// Returns `true` if `earlier` and `later` conflict.
///
/// Two operations conflict when they belong to different transactions, touch
/// the same resource and at least one of them is a write. Commits carry no
/// resource and never conflict.
pub fn is_conflicting<Txn, Resource>(
    earlier: &Operation<Txn, Resource>,
    later: &Operation<Txn, Resource>,
) -> bool
where
    Txn: Eq,
    Resource: Eq,
{
    match (earlier.resource(), later.resource()) {
        (Some(first), Some(second)) => {
            (earlier.is_write() || later.is_write())
                && earlier.transaction() != later.transaction()
                && first == second
        }
        _ => false,
    }
}

/// Every conflicting pair of `schedule`, ordered by the position of the
/// earlier operation and then of the later one.
#[must_use]
pub fn conflicts<Txn, Resource>(
    schedule: &Schedule<Txn, Resource>,
) -> Vec<ConflictPair<'_, Txn, Resource>>
where
    Txn: Eq,
    Resource: Eq,
{
    let ops = schedule.operations();
    let mut pairs = Vec::new();
    for (i, earlier) in ops.iter().enumerate() {
        for (j, later) in ops.iter().enumerate().skip(i + 1) {
            if is_conflicting(earlier, later) {
                pairs.push(ConflictPair {
                    earlier: Step {
                        position: i,
                        operation: earlier,
                    },
                    later: Step {
                        position: j,
                        operation: later,
                    },
                });
            }
        }
    }
    pairs
}

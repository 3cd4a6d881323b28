//! Strictness: no reading or overwriting another transaction's uncommitted
//! write.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::analysis::error::Error;
use crate::conflict::{conflicts, ConflictPair};
use crate::schedule::{Operation, Schedule};

/// Checks that no transaction reads or overwrites a value written by another
/// transaction before that transaction has committed.
///
/// The check runs over the conflicting pairs of the schedule. Pairs whose
/// earlier operation is a write are grouped by the position of their later
/// operation; walking the schedule in order while recording where each
/// transaction last committed, each such pair requires its writer to have
/// committed after the write and before the later operation.
///
/// # Errors
///
/// Returns [`Error::UncommittedAccess`] for the first offending operation.
pub fn check_strict<Txn, Resource>(
    schedule: &Schedule<Txn, Resource>,
) -> Result<(), Error<Txn, Resource>>
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Eq + Clone,
{
    let pairs = conflicts(schedule);
    let mut after_write: HashMap<usize, Vec<&ConflictPair<'_, Txn, Resource>>> = HashMap::new();
    for pair in pairs.iter().filter(|pair| pair.earlier.operation.is_write()) {
        after_write
            .entry(pair.later.position)
            .or_default()
            .push(pair);
    }

    let mut last_commit: HashMap<&Txn, usize> = HashMap::new();

    for (position, op) in schedule.operations().iter().enumerate() {
        let (transaction, resource) = match op {
            Operation::Commit { transaction } => {
                last_commit.insert(transaction, position);
                continue;
            }
            Operation::Read {
                transaction,
                resource,
            }
            | Operation::Write {
                transaction,
                resource,
            } => (transaction, resource),
        };
        let Some(pending) = after_write.get(&position) else {
            continue;
        };
        if let Some(pair) = pending
            .iter()
            .find(|pair| {
                last_commit
                    .get(pair.earlier.operation.transaction())
                    .is_none_or(|&commit| commit < pair.earlier.position)
            })
        {
            let writer = pair.earlier.operation.transaction();
            tracing::debug!(position, ?transaction, ?writer, "access to uncommitted write");
            return Err(Error::UncommittedAccess {
                transaction: transaction.clone(),
                writer: writer.clone(),
                resource: resource.clone(),
                position,
            });
        }
    }

    Ok(())
}

#[must_use]
pub fn is_strict<Txn, Resource>(schedule: &Schedule<Txn, Resource>) -> bool
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Eq + Clone,
{
    check_strict(schedule).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_before_commit() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::write(2, "A"),
            Operation::commit(2),
            Operation::commit(1),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            check_strict(&schedule),
            Err(Error::UncommittedAccess {
                transaction: 2,
                writer: 1,
                resource: "A",
                position: 1,
            })
        );
    }

    #[test]
    fn test_read_before_commit() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::read(2, "A"),
            Operation::commit(1),
            Operation::commit(2),
        ]
        .into_iter()
        .collect();

        assert!(!is_strict(&schedule));
    }

    #[test]
    fn test_write_after_foreign_read_is_strict() {
        let schedule: Schedule<u64, &str> = [
            Operation::read(1, "A"),
            Operation::write(2, "A"),
            Operation::commit(2),
            Operation::commit(1),
        ]
        .into_iter()
        .collect();

        assert!(is_strict(&schedule));
    }

    #[test]
    fn test_access_after_commit() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::commit(1),
            Operation::write(2, "A"),
            Operation::read(3, "A"),
            Operation::commit(2),
            Operation::commit(3),
        ]
        .into_iter()
        .collect();

        // 3 reads A while 2's overwrite is still pending.
        assert_eq!(
            check_strict(&schedule),
            Err(Error::UncommittedAccess {
                transaction: 3,
                writer: 2,
                resource: "A",
                position: 3,
            })
        );
    }
}

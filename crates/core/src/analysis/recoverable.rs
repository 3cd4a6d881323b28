//! Recoverability: nobody commits before the transactions it read from.

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::analysis::dirty::DirtyWrites;
use crate::analysis::error::Error;
use crate::schedule::{Operation, Schedule};

/// What a transaction has observed of other transactions' uncommitted writes.
struct Reads<Txn, Resource> {
    /// Transactions whose uncommitted writes were visible to a read.
    from: HashSet<Txn>,
    /// Resources read while they had uncommitted writers.
    resources: HashSet<Resource>,
}

impl<Txn, Resource> Default for Reads<Txn, Resource> {
    fn default() -> Self {
        Self {
            from: HashSet::new(),
            resources: HashSet::new(),
        }
    }
}

/// Checks that whenever a transaction commits, every transaction whose
/// uncommitted write it read has already committed.
///
/// The scan is a single left-to-right pass. On a commit the committer's own
/// writes are cleared first, then each transaction it read from is looked up
/// among the writers still pending on the resources it read.
///
/// # Errors
///
/// Returns [`Error::UnrecoverableCommit`] for the first offending commit.
pub fn check_recoverable<Txn, Resource>(
    schedule: &Schedule<Txn, Resource>,
) -> Result<(), Error<Txn, Resource>>
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Hash + Eq + Clone,
{
    let mut dirty = DirtyWrites::default();
    let mut reads: HashMap<Txn, Reads<Txn, Resource>> = HashMap::new();

    for (position, op) in schedule.operations().iter().enumerate() {
        match op {
            Operation::Write {
                transaction,
                resource,
            } => dirty.record_write(transaction.clone(), resource.clone()),
            Operation::Read {
                transaction,
                resource,
            } => {
                let entry = reads.entry(transaction.clone()).or_default();
                entry.from.extend(dirty.writers(resource).cloned());
                entry.resources.insert(resource.clone());
            }
            Operation::Commit { transaction } => {
                dirty.commit(transaction);
                let Some(observed) = reads.get(transaction) else {
                    continue;
                };
                for resource in &observed.resources {
                    if let Some(source) = observed
                        .from
                        .iter()
                        .find(|source| dirty.is_dirty_by(resource, source))
                    {
                        tracing::debug!(
                            position,
                            committer = ?transaction,
                            reads_from = ?source,
                            "commit before source transaction"
                        );
                        return Err(Error::UnrecoverableCommit {
                            committer: transaction.clone(),
                            reads_from: source.clone(),
                            resource: resource.clone(),
                            position,
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

#[must_use]
pub fn is_recoverable<Txn, Resource>(schedule: &Schedule<Txn, Resource>) -> bool
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Hash + Eq + Clone,
{
    check_recoverable(schedule).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_commits_first() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::read(2, "A"),
            Operation::commit(2),
            Operation::commit(1),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            check_recoverable(&schedule),
            Err(Error::UnrecoverableCommit {
                committer: 2,
                reads_from: 1,
                resource: "A",
                position: 2,
            })
        );
    }

    #[test]
    fn test_writer_commits_first() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::read(2, "A"),
            Operation::commit(1),
            Operation::commit(2),
        ]
        .into_iter()
        .collect();

        assert!(is_recoverable(&schedule));
    }

    #[test]
    fn test_read_of_own_write_then_commit() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::read(1, "A"),
            Operation::commit(1),
        ]
        .into_iter()
        .collect();

        assert!(is_recoverable(&schedule));
    }

    #[test]
    fn test_source_never_commits() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::read(2, "A"),
            Operation::commit(2),
        ]
        .into_iter()
        .collect();

        assert!(!is_recoverable(&schedule));
    }
}

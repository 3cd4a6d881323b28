//! Conflict serializability: the precedence graph must be acyclic.

use core::fmt::Debug;
use core::hash::Hash;

use crate::analysis::error::Error;
use crate::conflict::graph::build_conflict_graph;
use crate::schedule::Schedule;

/// Checks that `schedule` is conflict serializable.
///
/// # Errors
///
/// Returns [`Error::Cycle`] with an edge of the first cycle found in the
/// precedence graph.
pub fn check_conflict_serializable<Txn, Resource>(
    schedule: &Schedule<Txn, Resource>,
) -> Result<(), Error<Txn, Resource>>
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Eq,
{
    match build_conflict_graph(schedule).find_cycle_edge() {
        Some((a, b)) => {
            tracing::debug!(?a, ?b, "precedence graph has a cycle");
            Err(Error::Cycle { a, b })
        }
        None => Ok(()),
    }
}

#[must_use]
pub fn is_conflict_serializable<Txn, Resource>(schedule: &Schedule<Txn, Resource>) -> bool
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Eq,
{
    check_conflict_serializable(schedule).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Operation;

    #[test]
    fn test_write_skew_cycle() {
        // 1 -> 2 on A, 2 -> 1 on B
        let schedule: Schedule<u64, &str> = [
            Operation::read(1, "A"),
            Operation::read(2, "B"),
            Operation::write(2, "A"),
            Operation::write(1, "B"),
            Operation::commit(1),
            Operation::commit(2),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            check_conflict_serializable(&schedule),
            Err(Error::Cycle { a: 2, b: 1 })
        );
    }

    #[test]
    fn test_serial_schedule() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::read(1, "B"),
            Operation::commit(1),
            Operation::read(2, "A"),
            Operation::write(2, "B"),
            Operation::commit(2),
        ]
        .into_iter()
        .collect();

        assert!(is_conflict_serializable(&schedule));
    }
}

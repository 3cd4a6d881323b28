use core::fmt::{Display, Formatter};

/// The first violation found while checking a property of a schedule.
///
/// `position` fields are zero-based indices into the schedule's operations.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<Txn, Resource> {
    /// The precedence graph has a cycle; `a -> b` is an edge on it.
    Cycle { a: Txn, b: Txn },
    /// `committer` committed while `reads_from`, whose write to `resource` it
    /// had read, was still uncommitted.
    UnrecoverableCommit {
        committer: Txn,
        reads_from: Txn,
        resource: Resource,
        position: usize,
    },
    /// `reader` read `resource` while `writer`'s write to it was uncommitted.
    DirtyRead {
        reader: Txn,
        writer: Txn,
        resource: Resource,
        position: usize,
    },
    /// `transaction` read or overwrote `resource` before `writer`, which
    /// wrote it earlier, had committed.
    UncommittedAccess {
        transaction: Txn,
        writer: Txn,
        resource: Resource,
        position: usize,
    },
}

impl<Txn, Resource> Display for Error<Txn, Resource>
where
    Txn: Display,
    Resource: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Cycle { a, b } => {
                write!(f, "precedence graph has a cycle through {a} -> {b}")
            }
            Self::UnrecoverableCommit {
                committer,
                reads_from,
                resource,
                position,
            } => write!(
                f,
                "C{committer} at {position} commits before T{reads_from}, whose write to {resource} it read"
            ),
            Self::DirtyRead {
                reader,
                writer,
                resource,
                position,
            } => write!(
                f,
                "R{reader}({resource}) at {position} reads the uncommitted write of T{writer}"
            ),
            Self::UncommittedAccess {
                transaction,
                writer,
                resource,
                position,
            } => write!(
                f,
                "T{transaction} accesses {resource} at {position} before T{writer}, which wrote it, commits"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Error;

    #[test]
    fn test_display() {
        let cycle: Error<u64, &str> = Error::Cycle { a: 1, b: 2 };
        assert_eq!(cycle.to_string(), "precedence graph has a cycle through 1 -> 2");

        let dirty: Error<u64, &str> = Error::DirtyRead {
            reader: 2,
            writer: 1,
            resource: "A",
            position: 1,
        };
        assert_eq!(
            dirty.to_string(),
            "R2(A) at 1 reads the uncommitted write of T1"
        );
    }
}

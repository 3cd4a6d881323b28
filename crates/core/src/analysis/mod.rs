use core::fmt::{Debug, Display, Formatter};
use core::hash::Hash;

use self::cascadeless::check_cascadeless;
use self::error::Error;
use self::recoverable::check_recoverable;
use self::serializable::check_conflict_serializable;
use self::strict::check_strict;
use crate::schedule::Schedule;

pub mod cascadeless;
pub mod dirty;
pub mod error;
pub mod recoverable;
pub mod serializable;
pub mod strict;

pub use cascadeless::is_cascadeless;
pub use recoverable::is_recoverable;
pub use serializable::is_conflict_serializable;
pub use strict::is_strict;

/// Correctness properties a schedule can be checked against.
///
/// `Strict`, `Cascadeless` and `Recoverable` are ordered from strongest to
/// weakest: each implies the next. `ConflictSerializable` is independent of
/// the other three.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Property {
    /// The precedence graph is acyclic.
    ConflictSerializable,
    /// Transactions commit only after those they read uncommitted data from.
    Recoverable,
    /// No transaction reads uncommitted data of another (ACA).
    Cascadeless,
    /// No transaction reads or overwrites uncommitted data of another.
    Strict,
}

impl Property {
    pub const ALL: [Self; 4] = [
        Self::ConflictSerializable,
        Self::Recoverable,
        Self::Cascadeless,
        Self::Strict,
    ];
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::ConflictSerializable => "conflict serializable",
            Self::Recoverable => "recoverable",
            Self::Cascadeless => "cascadeless",
            Self::Strict => "strict",
        };
        f.write_str(name)
    }
}

/// Outcome of every property for one schedule.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub conflict_serializable: bool,
    pub recoverable: bool,
    pub cascadeless: bool,
    pub strict: bool,
}

impl Analysis {
    #[must_use]
    pub const fn holds(&self, property: Property) -> bool {
        match property {
            Property::ConflictSerializable => self.conflict_serializable,
            Property::Recoverable => self.recoverable,
            Property::Cascadeless => self.cascadeless,
            Property::Strict => self.strict,
        }
    }
}

/// Check whether `schedule` satisfies `property`.
///
/// Every check builds its own bookkeeping from scratch, so checks may be
/// repeated or run concurrently on the same schedule. An empty schedule
/// satisfies every property.
///
/// # Errors
///
/// Returns the first violation found:
///
/// - [`Error::Cycle`] for [`Property::ConflictSerializable`],
/// - [`Error::UnrecoverableCommit`] for [`Property::Recoverable`],
/// - [`Error::DirtyRead`] for [`Property::Cascadeless`],
/// - [`Error::UncommittedAccess`] for [`Property::Strict`].
pub fn check<Txn, Resource>(
    schedule: &Schedule<Txn, Resource>,
    property: Property,
) -> Result<(), Error<Txn, Resource>>
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Hash + Eq + Clone,
{
    tracing::debug!(
        operations = schedule.len(),
        transactions = schedule.transaction_ids().len(),
        ?property,
        "checking schedule"
    );

    match property {
        Property::ConflictSerializable => check_conflict_serializable(schedule),
        Property::Recoverable => check_recoverable(schedule),
        Property::Cascadeless => check_cascadeless(schedule),
        Property::Strict => check_strict(schedule),
    }
}

/// Evaluates all four properties of `schedule`.
#[must_use]
pub fn analyze<Txn, Resource>(schedule: &Schedule<Txn, Resource>) -> Analysis
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Hash + Eq + Clone,
{
    Analysis {
        conflict_serializable: check(schedule, Property::ConflictSerializable).is_ok(),
        recoverable: check(schedule, Property::Recoverable).is_ok(),
        cascadeless: check(schedule, Property::Cascadeless).is_ok(),
        strict: check(schedule, Property::Strict).is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Operation;

    #[test]
    fn test_empty_schedule_satisfies_everything() {
        let schedule: Schedule<u64, &str> = Schedule::new();
        let analysis = analyze(&schedule);
        for property in Property::ALL {
            assert!(analysis.holds(property), "{property} should hold");
        }
    }

    #[test]
    fn test_check_dispatches() {
        let schedule: Schedule<u64, &str> = [
            Operation::write(1, "A"),
            Operation::write(2, "A"),
            Operation::commit(2),
            Operation::commit(1),
        ]
        .into_iter()
        .collect();

        assert!(check(&schedule, Property::ConflictSerializable).is_ok());
        assert!(check(&schedule, Property::Recoverable).is_ok());
        assert!(check(&schedule, Property::Cascadeless).is_ok());
        assert!(matches!(
            check(&schedule, Property::Strict),
            Err(Error::UncommittedAccess { .. })
        ));
    }

    #[test]
    fn test_property_display() {
        assert_eq!(
            Property::ConflictSerializable.to_string(),
            "conflict serializable"
        );
        assert_eq!(Property::Strict.to_string(), "strict");
    }
}

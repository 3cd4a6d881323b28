/// The three kinds of operation a transaction can issue.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpKind {
    Read,
    Write,
    Commit,
}

impl OpKind {
    /// The single-letter prefix used by the textual syntax.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Read => 'R',
            Self::Write => 'W',
            Self::Commit => 'C',
        }
    }
}

/// A single operation of a schedule.
///
/// Reads and writes always name the resource they touch; commits never do.
/// The shape of the enum makes any other combination unrepresentable.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation<Txn, Resource> {
    Read { transaction: Txn, resource: Resource },
    Write { transaction: Txn, resource: Resource },
    Commit { transaction: Txn },
}

impl<Txn, Resource> Operation<Txn, Resource> {
    pub const fn read(transaction: Txn, resource: Resource) -> Self {
        Self::Read {
            transaction,
            resource,
        }
    }

    pub const fn write(transaction: Txn, resource: Resource) -> Self {
        Self::Write {
            transaction,
            resource,
        }
    }

    pub const fn commit(transaction: Txn) -> Self {
        Self::Commit { transaction }
    }

    #[must_use]
    pub const fn kind(&self) -> OpKind {
        match self {
            Self::Read { .. } => OpKind::Read,
            Self::Write { .. } => OpKind::Write,
            Self::Commit { .. } => OpKind::Commit,
        }
    }

    /// The transaction that issued this operation.
    #[must_use]
    pub const fn transaction(&self) -> &Txn {
        match self {
            Self::Read { transaction, .. }
            | Self::Write { transaction, .. }
            | Self::Commit { transaction } => transaction,
        }
    }

    /// The resource touched by a read or write; `None` for a commit.
    #[must_use]
    pub const fn resource(&self) -> Option<&Resource> {
        match self {
            Self::Read { resource, .. } | Self::Write { resource, .. } => Some(resource),
            Self::Commit { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }

    #[must_use]
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::Commit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let read = Operation::read(2, "A");
        assert_eq!(read.kind(), OpKind::Read);
        assert_eq!(read.transaction(), &2);
        assert_eq!(read.resource(), Some(&"A"));
        assert!(!read.is_write());

        let write = Operation::write(1, "B");
        assert_eq!(write.kind(), OpKind::Write);
        assert!(write.is_write());
        assert!(!write.is_commit());

        let commit: Operation<u64, &str> = Operation::commit(3);
        assert_eq!(commit.kind(), OpKind::Commit);
        assert_eq!(commit.transaction(), &3);
        assert_eq!(commit.resource(), None);
        assert!(commit.is_commit());
    }

    #[test]
    fn test_symbol() {
        assert_eq!(OpKind::Read.symbol(), 'R');
        assert_eq!(OpKind::Write.symbol(), 'W');
        assert_eq!(OpKind::Commit.symbol(), 'C');
    }
}

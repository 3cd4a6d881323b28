//! The schedule model: operations and the append-only sequence they form.

use alloc::vec::Vec;

pub mod display;
pub mod types;

pub use types::{OpKind, Operation};

/// An ordered, append-only sequence of operations.
///
/// Alongside the operations, a schedule keeps the ids of every participating
/// transaction in order of first appearance. The list is kept in sync on
/// every [`append`](Self::append) and is never edited directly.
///
/// With the `serde` feature a schedule serializes as its plain operation
/// list; the transaction list is re-derived on deserialization.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<Operation<Txn, Resource>>",
        into = "Vec<Operation<Txn, Resource>>",
        bound(
            serialize = "Txn: serde::Serialize + Clone, Resource: serde::Serialize + Clone",
            deserialize = "Txn: serde::Deserialize<'de> + Eq + Clone, Resource: serde::Deserialize<'de>"
        )
    )
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<Txn, Resource> {
    ops: Vec<Operation<Txn, Resource>>,
    transactions: Vec<Txn>,
}

impl<Txn, Resource> Schedule<Txn, Resource> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ops: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// All operations, in schedule order.
    #[must_use]
    pub fn operations(&self) -> &[Operation<Txn, Resource>] {
        &self.ops
    }

    /// Distinct transaction ids, in order of first appearance.
    #[must_use]
    pub fn transaction_ids(&self) -> &[Txn] {
        &self.transactions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<Txn, Resource> Schedule<Txn, Resource>
where
    Txn: Eq + Clone,
{
    /// Appends `op` to the end of the schedule, registering its transaction
    /// if it has not been seen before.
    pub fn append(&mut self, op: Operation<Txn, Resource>) {
        if !self.transactions.contains(op.transaction()) {
            self.transactions.push(op.transaction().clone());
        }
        self.ops.push(op);
    }
}

impl<Txn, Resource> Default for Schedule<Txn, Resource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Txn, Resource> Extend<Operation<Txn, Resource>> for Schedule<Txn, Resource>
where
    Txn: Eq + Clone,
{
    fn extend<I: IntoIterator<Item = Operation<Txn, Resource>>>(&mut self, iter: I) {
        for op in iter {
            self.append(op);
        }
    }
}

impl<Txn, Resource> FromIterator<Operation<Txn, Resource>> for Schedule<Txn, Resource>
where
    Txn: Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = Operation<Txn, Resource>>>(iter: I) -> Self {
        let mut schedule = Self::new();
        schedule.extend(iter);
        schedule
    }
}

impl<Txn, Resource> From<Vec<Operation<Txn, Resource>>> for Schedule<Txn, Resource>
where
    Txn: Eq + Clone,
{
    fn from(ops: Vec<Operation<Txn, Resource>>) -> Self {
        ops.into_iter().collect()
    }
}

impl<Txn, Resource> From<Schedule<Txn, Resource>> for Vec<Operation<Txn, Resource>> {
    fn from(schedule: Schedule<Txn, Resource>) -> Self {
        schedule.ops
    }
}

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Per-resource record of uncommitted writers.
///
/// A transaction enters a resource's set when it writes the resource and
/// leaves every set when it commits. Resources are tracked lazily: one that
/// has never been written has no entry and is never dirty.
#[derive(Debug)]
pub struct DirtyWrites<Txn, Resource> {
    writers: HashMap<Resource, HashSet<Txn>>,
}

impl<Txn, Resource> Default for DirtyWrites<Txn, Resource> {
    fn default() -> Self {
        Self {
            writers: HashMap::new(),
        }
    }
}

impl<Txn, Resource> DirtyWrites<Txn, Resource>
where
    Txn: Eq + Hash,
    Resource: Eq + Hash,
{
    pub fn record_write(&mut self, transaction: Txn, resource: Resource) {
        self.writers.entry(resource).or_default().insert(transaction);
    }

    /// Marks every write of `transaction` as committed.
    pub fn commit(&mut self, transaction: &Txn) {
        for writers in self.writers.values_mut() {
            writers.remove(transaction);
        }
    }

    /// Transactions holding an uncommitted write to `resource`.
    pub fn writers(&self, resource: &Resource) -> impl Iterator<Item = &Txn> {
        self.writers.get(resource).into_iter().flatten()
    }

    /// Returns `true` if `transaction` holds an uncommitted write to `resource`.
    pub fn is_dirty_by(&self, resource: &Resource, transaction: &Txn) -> bool {
        self.writers
            .get(resource)
            .is_some_and(|writers| writers.contains(transaction))
    }
}

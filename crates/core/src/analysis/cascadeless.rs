//! Cascadelessness (avoids cascading aborts): no dirty reads at all.

use core::fmt::Debug;
use core::hash::Hash;

use crate::analysis::dirty::DirtyWrites;
use crate::analysis::error::Error;
use crate::schedule::{Operation, Schedule};

/// Checks that no transaction of `schedule` reads a resource while another
/// transaction holds an uncommitted write to it.
///
/// Reading one's own uncommitted write is allowed.
///
/// # Errors
///
/// Returns [`Error::DirtyRead`] for the first offending read.
pub fn check_cascadeless<Txn, Resource>(
    schedule: &Schedule<Txn, Resource>,
) -> Result<(), Error<Txn, Resource>>
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Hash + Eq + Clone,
{
    let mut dirty = DirtyWrites::default();

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
                if let Some(writer) = dirty.writers(resource).find(|w| *w != transaction) {
                    tracing::debug!(position, reader = ?transaction, ?writer, "dirty read");
                    return Err(Error::DirtyRead {
                        reader: transaction.clone(),
                        writer: writer.clone(),
                        resource: resource.clone(),
                        position,
                    });
                }
            }
            Operation::Commit { transaction } => dirty.commit(transaction),
        }
    }

    Ok(())
}

#[must_use]
pub fn is_cascadeless<Txn, Resource>(schedule: &Schedule<Txn, Resource>) -> bool
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Hash + Eq + Clone,
{
    check_cascadeless(schedule).is_ok()
}

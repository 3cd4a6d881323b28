//! Rendering of operations and schedules in the compact textual syntax.
//!
//! A read or write prints as its kind letter, transaction and parenthesized
//! resource (`R1(A)`, `W2(B)`); a commit prints as `C3`. A schedule prints
//! its operations joined by commas, which is the form `txsched_parser`
//! accepts back unchanged.

use core::fmt::{Display, Formatter, Result};

use super::types::Operation;
use super::Schedule;

impl<Txn, Resource> Display for Operation<Txn, Resource>
where
    Txn: Display,
    Resource: Display,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.kind().symbol(), self.transaction())?;
        if let Some(resource) = self.resource() {
            write!(f, "({resource})")?;
        }
        Ok(())
    }
}

impl<Txn, Resource> Display for Schedule<Txn, Resource>
where
    Txn: Display,
    Resource: Display,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        for (i, op) in self.operations().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// DSL macros for building test schedules.
///
/// Produces `Schedule<u64, &'static str>`.
///
/// # Syntax
///
/// ```ignore
/// schedule![w(1, A), r(2, A), c(1), c(2)]
/// ```
///
/// - `r(txn, RES)` → `Operation::read(txn, "RES")`
/// - `w(txn, RES)` → `Operation::write(txn, "RES")`
/// - `c(txn)`      → `Operation::commit(txn)`
///
/// Build a single Operation.
#[macro_export]
macro_rules! op {
    (r($txn:expr, $res:ident)) => {
        txsched_core::schedule::Operation::<u64, &'static str>::read($txn, stringify!($res))
    };
    (w($txn:expr, $res:ident)) => {
        txsched_core::schedule::Operation::<u64, &'static str>::write($txn, stringify!($res))
    };
    (c($txn:expr)) => {
        txsched_core::schedule::Operation::<u64, &'static str>::commit($txn)
    };
}

/// Build a Schedule from a comma-separated operation list.
#[macro_export]
macro_rules! schedule {
    ($($kind:ident($($args:tt)*)),* $(,)?) => {{
        let ops: Vec<txsched_core::schedule::Operation<u64, &'static str>> =
            vec![$($crate::op!($kind($($args)*))),*];
        txsched_core::schedule::Schedule::from(ops)
    }};
}

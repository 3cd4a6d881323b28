use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use txsched_core::schedule::{Operation, Schedule};
use txsched_core::{analyze, check, Property};

const RESOURCES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// Build a round-robin schedule.
/// `transactions`: number of interleaved transactions
/// `ops_per_txn`: reads/writes issued by each transaction before it commits
fn build_schedule(transactions: u64, ops_per_txn: usize) -> Schedule<u64, &'static str> {
    let mut schedule = Schedule::new();
    for step in 0..ops_per_txn {
        for txn in 0..transactions {
            #[allow(clippy::cast_possible_truncation)]
            let resource = RESOURCES[(txn as usize + step) % RESOURCES.len()];
            if (txn as usize + step) % 3 == 0 {
                schedule.append(Operation::write(txn, resource));
            } else {
                schedule.append(Operation::read(txn, resource));
            }
        }
    }
    for txn in 0..transactions {
        schedule.append(Operation::commit(txn));
    }
    schedule
}

fn bench_analysis(c: &mut Criterion) {
    // Small: 4 transactions, 4 operations each
    let schedule_small = build_schedule(4, 4);

    // Medium: 16 transactions, 8 operations each
    let schedule_medium = build_schedule(16, 8);

    // Large: 32 transactions, 16 operations each
    let schedule_large = build_schedule(32, 16);

    let mut group = c.benchmark_group("schedule_analysis");

    for (name, schedule) in [
        ("small", &schedule_small),
        ("medium", &schedule_medium),
        ("large", &schedule_large),
    ] {
        for property in Property::ALL {
            group.bench_function(format!("{property}_{name}"), |b| {
                b.iter(|| {
                    let _ = check(black_box(schedule), black_box(property));
                });
            });
        }
        group.bench_function(format!("analyze_{name}"), |b| {
            b.iter(|| analyze(black_box(schedule)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);

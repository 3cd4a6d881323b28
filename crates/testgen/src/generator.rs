use chrono::{DateTime, Duration, Local};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use txsched_core::schedule::{OpKind, Operation, Schedule};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, TypedBuilder)]
pub struct ScheduleParams {
    pub id: u64,
    pub n_transaction: u64,
    pub n_resource: u64,
    /// Seed of the generator that produced the schedule.
    #[builder(default)]
    pub seed: u64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct GeneratedSchedule {
    params: ScheduleParams,
    start: DateTime<Local>,
    end: DateTime<Local>,
    data: Schedule<String, String>,
}

impl GeneratedSchedule {
    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_data(&self) -> &Schedule<String, String> {
        &self.data
    }

    #[must_use]
    pub const fn get_params(&self) -> &ScheduleParams {
        &self.params
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Name of the `index`-th resource: `A`..`Z`, then `BA`, `BB`, ...
///
/// Letters are base-26 digits with `A` as zero, so the sequence skips the
/// two-letter names starting with `A`.
#[must_use]
pub fn resource_name(mut index: u64) -> String {
    const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut digits = Vec::new();
    loop {
        #[allow(clippy::cast_possible_truncation)]
        digits.push(char::from(ALPHABET[(index % 26) as usize]));
        index /= 26;
        if index == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Generate a single schedule over transactions `1..=n_transaction` and
/// `n_resource` resources.
///
/// # Shape invariant
///
/// Every transaction issues exactly one commit and nothing after it. This is
/// achieved by keeping the set of still-open transactions: each step draws an
/// operation kind uniformly from read, write and commit and an open
/// transaction uniformly; a commit closes the transaction. Generation stops
/// once every transaction has committed.
///
/// With no resources only commits can be drawn, so every transaction
/// commits without touching anything. With no transactions the schedule is
/// empty.
pub fn generate_schedule<R>(
    n_transaction: u64,
    n_resource: u64,
    rng: &mut R,
) -> Schedule<String, String>
where
    R: RngExt,
{
    const KINDS: [OpKind; 3] = [OpKind::Read, OpKind::Write, OpKind::Commit];

    let mut open: Vec<String> = (1..=n_transaction).map(|t| t.to_string()).collect();
    let mut schedule = Schedule::new();

    while !open.is_empty() {
        let kind = if n_resource == 0 {
            OpKind::Commit
        } else {
            KINDS[rng.random_range(0..KINDS.len())]
        };
        let slot = rng.random_range(0..open.len());
        let op = match kind {
            OpKind::Commit => Operation::commit(open.remove(slot)),
            OpKind::Read => Operation::read(
                open[slot].clone(),
                resource_name(rng.random_range(0..n_resource)),
            ),
            OpKind::Write => Operation::write(
                open[slot].clone(),
                resource_name(rng.random_range(0..n_resource)),
            ),
        };
        schedule.append(op);
    }

    schedule
}

/// Generate `n_schedule` schedules in parallel.
///
/// Schedule `i` is drawn from `StdRng::seed_from_u64(seed + i)`, so the
/// whole batch is reproducible from `seed`.
#[must_use]
pub fn generate_mult_schedules(
    n_schedule: u64,
    n_transaction: u64,
    n_resource: u64,
    seed: u64,
) -> Vec<GeneratedSchedule> {
    (0..n_schedule)
        .into_par_iter()
        .map(|i_schedule| {
            let schedule_seed = seed.wrapping_add(i_schedule);
            let mut rng = StdRng::seed_from_u64(schedule_seed);
            let start_time = Local::now();
            let data = generate_schedule(n_transaction, n_resource, &mut rng);
            let end_time = Local::now();
            GeneratedSchedule {
                params: ScheduleParams {
                    id: i_schedule,
                    n_transaction,
                    n_resource,
                    seed: schedule_seed,
                },
                start: start_time,
                end: end_time,
                data,
            }
        })
        .collect()
}

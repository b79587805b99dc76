use crate::args::PositiveUsize;

/// Number of requests worker `worker_index` performs when `total` requests
/// are split across `concurrency` workers.
///
/// Every worker gets `total / concurrency`; the lowest `total % concurrency`
/// indices get one more. Indices outside the pool get nothing.
#[must_use]
pub const fn assign(total: usize, concurrency: PositiveUsize, worker_index: usize) -> usize {
    let workers = concurrency.get();
    if worker_index >= workers {
        return 0;
    }
    let base = match total.checked_div(workers) {
        Some(base) => base,
        None => 0,
    };
    let remainder = match total.checked_rem(workers) {
        Some(remainder) => remainder,
        None => 0,
    };
    if worker_index < remainder {
        base.saturating_add(1)
    } else {
        base
    }
}

/// Per-worker request counts, indexed by worker.
#[must_use]
pub fn work_assignments(total: usize, concurrency: PositiveUsize) -> Vec<usize> {
    (0..concurrency.get())
        .map(|worker_index| assign(total, concurrency, worker_index))
        .collect()
}

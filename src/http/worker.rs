use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::metrics::RequestOutcome;

use super::transport::Transport;

pub(super) struct WorkerContext<T> {
    pub(super) index: usize,
    pub(super) assigned: usize,
    pub(super) transport: T,
    pub(super) url: Arc<str>,
    pub(super) outcomes_tx: mpsc::Sender<RequestOutcome>,
}

/// Attempts each assigned request exactly once, in sequence. Failures are
/// reported as outcomes and never stop the loop.
pub(super) async fn run_worker<T: Transport>(worker: WorkerContext<T>) {
    let WorkerContext {
        index,
        assigned,
        transport,
        url,
        outcomes_tx,
    } = worker;

    debug!(worker = index, assigned, "Worker started");
    let mut failures: usize = 0;
    for _ in 0..assigned {
        let outcome = transport.fetch(&url).await;
        if outcome == RequestOutcome::NetworkFailure {
            failures = failures.saturating_add(1);
        }
        if outcomes_tx.send(outcome).await.is_err() {
            warn!(worker = index, "Outcome channel closed; stopping worker.");
            break;
        }
    }
    debug!(worker = index, assigned, failures, "Worker finished");
}

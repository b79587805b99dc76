use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::mpsc;

use super::{Report, RequestOutcome};

/// Commutative counter over request outcomes.
#[derive(Debug, Default)]
pub struct Aggregator {
    status_counts: BTreeMap<u16, usize>,
    network_errors: usize,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Success { status } => {
                let count = self.status_counts.entry(status).or_insert(0);
                *count = count.saturating_add(1);
            }
            RequestOutcome::NetworkFailure => {
                self.network_errors = self.network_errors.saturating_add(1);
            }
        }
    }

    #[must_use]
    pub fn finish(self, elapsed: Duration, total_requests: usize) -> Report {
        let report = Report::new(
            elapsed,
            total_requests,
            self.status_counts,
            self.network_errors,
        );
        let recorded = report.recorded();
        if recorded != total_requests {
            tracing::warn!(
                "Recorded {} outcomes but {} requests were planned.",
                recorded,
                total_requests
            );
        }
        report
    }
}

/// Folds a finite sequence of outcomes into a report.
#[must_use]
pub fn fold_outcomes<I>(outcomes: I, elapsed: Duration, total_requests: usize) -> Report
where
    I: IntoIterator<Item = RequestOutcome>,
{
    let mut aggregator = Aggregator::new();
    for outcome in outcomes {
        aggregator.record(outcome);
    }
    aggregator.finish(elapsed, total_requests)
}

/// Drains the outcome channel until every sender is gone, then builds the
/// report.
pub async fn aggregate(
    mut outcomes_rx: mpsc::Receiver<RequestOutcome>,
    elapsed: Duration,
    total_requests: usize,
) -> Report {
    let mut aggregator = Aggregator::new();
    while let Some(outcome) = outcomes_rx.recv().await {
        aggregator.record(outcome);
    }
    aggregator.finish(elapsed, total_requests)
}

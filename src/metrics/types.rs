use std::collections::BTreeMap;
use std::time::Duration;

/// Result of one attempted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
    /// A response arrived; any status code counts, including 4xx/5xx.
    Success { status: u16 },
    /// The request never produced a response (timeout, refused, DNS, ...).
    NetworkFailure,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    elapsed: Duration,
    total_requests: usize,
    status_counts: BTreeMap<u16, usize>,
    network_errors: usize,
}

impl Report {
    pub(super) const fn new(
        elapsed: Duration,
        total_requests: usize,
        status_counts: BTreeMap<u16, usize>,
        network_errors: usize,
    ) -> Self {
        Self {
            elapsed,
            total_requests,
            status_counts,
            network_errors,
        }
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn total_requests(&self) -> usize {
        self.total_requests
    }

    /// Responses per status code, in ascending code order.
    #[must_use]
    pub const fn status_counts(&self) -> &BTreeMap<u16, usize> {
        &self.status_counts
    }

    #[must_use]
    pub fn status_count(&self, status: u16) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    #[must_use]
    pub const fn network_errors(&self) -> usize {
        self.network_errors
    }

    /// Number of outcomes folded into this report.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.status_counts
            .values()
            .fold(self.network_errors, |acc, count| acc.saturating_add(*count))
    }
}

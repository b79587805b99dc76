use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::domain::LoadTestConfig;
use crate::error::{AppError, AppResult};
use crate::metrics::{Report, RequestOutcome, aggregate};

use super::assign::assign;
use super::transport::{ReqwestTransportFactory, TransportFactory};
use super::worker::{WorkerContext, run_worker};

/// Everything the aggregator needs once the workers are done.
#[derive(Debug)]
pub struct RunOutput {
    pub elapsed: Duration,
    /// Closed stream holding one outcome per attempted request.
    pub outcomes: mpsc::Receiver<RequestOutcome>,
}

/// Runs the load test against the real target with one HTTP client per
/// worker.
///
/// # Errors
///
/// Returns an error when a worker's HTTP client cannot be built. Nothing is
/// sent in that case.
pub async fn run_load_test(config: &LoadTestConfig) -> AppResult<Report> {
    let factory = ReqwestTransportFactory::new(config.request_timeout());
    run_with_transport(config, &factory).await
}

/// Dispatches the run through `factory` and folds the outcomes.
///
/// # Errors
///
/// Returns an error when a worker transport cannot be built.
pub async fn run_with_transport<F>(config: &LoadTestConfig, factory: &F) -> AppResult<Report>
where
    F: TransportFactory,
{
    let output = dispatch(config, factory).await?;
    let report = aggregate(output.outcomes, output.elapsed, config.total_requests()).await;
    info!(
        "Run finished: {} requests in {:?}, {} network errors.",
        report.total_requests(),
        report.elapsed(),
        report.network_errors()
    );
    Ok(report)
}

/// Splits the run across `concurrency` workers, waits for all of them, and
/// hands back the closed outcome stream with the elapsed wall-clock time.
///
/// # Errors
///
/// Returns an error when a worker transport cannot be built. Transports are
/// built before any worker starts, so a failed build sends no requests.
pub async fn dispatch<F>(config: &LoadTestConfig, factory: &F) -> AppResult<RunOutput>
where
    F: TransportFactory,
{
    let concurrency = config.concurrency();
    let total = config.total_requests();

    let mut transports = Vec::with_capacity(concurrency.get());
    for index in 0..concurrency.get() {
        transports.push(factory.build(index).map_err(AppError::http)?);
    }

    // Room for every outcome, so workers never wait on the consumer.
    let (outcomes_tx, outcomes_rx) = mpsc::channel(total.clamp(1, Semaphore::MAX_PERMITS));
    let url: Arc<str> = Arc::from(config.target_url());

    debug!(
        "Dispatching {} requests across {} workers.",
        total,
        concurrency.get()
    );
    let started = Instant::now();
    let mut handles = Vec::with_capacity(concurrency.get());
    for (index, transport) in transports.into_iter().enumerate() {
        let worker = WorkerContext {
            index,
            assigned: assign(total, concurrency, index),
            transport,
            url: Arc::clone(&url),
            outcomes_tx: outcomes_tx.clone(),
        };
        handles.push(tokio::spawn(run_worker(worker)));
    }
    drop(outcomes_tx);

    for (index, handle) in handles.into_iter().enumerate() {
        if let Err(err) = handle.await {
            error!("Worker {} did not complete: {}", index, err);
        }
    }
    let elapsed = started.elapsed();

    Ok(RunOutput {
        elapsed,
        outcomes: outcomes_rx,
    })
}

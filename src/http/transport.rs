use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::error::HttpError;
use crate::metrics::RequestOutcome;

/// Performs a single GET and classifies the result.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> RequestOutcome;
}

/// Builds the private transport each worker owns.
pub trait TransportFactory {
    type Transport: Transport + 'static;

    /// Creates the transport for `worker`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be built.
    fn build(&self, worker: usize) -> Result<Self::Transport, HttpError>;
}

pub struct ReqwestTransport {
    client: Client,
    worker: usize,
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> RequestOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Dropping the response releases the body and its connection
                // without reading any payload.
                drop(response);
                RequestOutcome::Success { status }
            }
            Err(err) => {
                warn!(worker = self.worker, "Network error: {}", err);
                RequestOutcome::NetworkFailure
            }
        }
    }
}

/// One `reqwest::Client` per worker, each with the run's request timeout.
/// Requests go straight to the target; proxy environment variables are
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct ReqwestTransportFactory {
    request_timeout: Duration,
}

impl ReqwestTransportFactory {
    #[must_use]
    pub const fn new(request_timeout: Duration) -> Self {
        Self { request_timeout }
    }
}

impl TransportFactory for ReqwestTransportFactory {
    type Transport = ReqwestTransport;

    fn build(&self, worker: usize) -> Result<ReqwestTransport, HttpError> {
        let client = Client::builder()
            .timeout(self.request_timeout)
            .no_proxy()
            .build()
            .map_err(|err| HttpError::BuildClientFailed {
                worker,
                source: err,
            })?;
        Ok(ReqwestTransport { client, worker })
    }
}

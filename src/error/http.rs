use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client for worker {worker}: {source}")]
    BuildClientFailed {
        worker: usize,
        #[source]
        source: reqwest::Error,
    },
}

use std::time::Duration;

use url::Url;

use crate::args::{DEFAULT_REQUEST_TIMEOUT, PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ValidationError};

/// Immutable description of one load-test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestConfig {
    target_url: String,
    total_requests: usize,
    concurrency: PositiveUsize,
    request_timeout: Duration,
}

impl LoadTestConfig {
    #[must_use]
    pub fn new(
        target_url: impl Into<String>,
        total_requests: usize,
        concurrency: PositiveUsize,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            total_requests,
            concurrency,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Builds a run config from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is missing, empty, unparsable, or not
    /// http/https.
    pub fn from_args(args: &TesterArgs) -> AppResult<Self> {
        let raw = args.url.as_deref().map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(AppError::validation(ValidationError::MissingUrl));
        }
        let parsed = Url::parse(raw).map_err(|err| {
            AppError::validation(ValidationError::InvalidUrl {
                url: raw.to_owned(),
                source: err,
            })
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(AppError::validation(ValidationError::UnsupportedScheme {
                    scheme: other.to_owned(),
                }));
            }
        }

        Ok(Self::new(raw, args.requests, args.concurrency)
            .with_request_timeout(args.request_timeout))
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub const fn total_requests(&self) -> usize {
        self.total_requests
    }

    #[must_use]
    pub const fn concurrency(&self) -> PositiveUsize {
        self.concurrency
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

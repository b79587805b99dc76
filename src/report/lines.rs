use crate::metrics::Report;

/// Status code reported on its own line.
const HIGHLIGHTED_STATUS: u16 = 200;
/// Codes at or above this are shown as failed requests.
const FAILED_STATUS_MIN: u16 = 400;
/// Requests/second scaled by 100, over elapsed microseconds.
const RATE_X100_PER_US: u128 = 100_000_000;
const PERCENT_DIVISOR: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Header,
    Plain,
    Success,
    Warning,
    Failure,
    Throughput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub style: LineStyle,
    pub text: String,
}

impl SummaryLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Requests per second multiplied by 100. Zero for an empty run; an
/// elapsed time under one microsecond counts as one.
#[must_use]
pub fn throughput_x100(report: &Report) -> u64 {
    let total = report.total_requests();
    if total == 0 {
        return 0;
    }
    let elapsed_us = report.elapsed().as_micros().max(1);
    let scaled = u128::try_from(total)
        .unwrap_or(u128::MAX)
        .saturating_mul(RATE_X100_PER_US)
        .checked_div(elapsed_us)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

#[must_use]
pub fn format_x100(value: u64) -> String {
    format!(
        "{}.{:02}",
        value / PERCENT_DIVISOR,
        value % PERCENT_DIVISOR
    )
}

#[must_use]
pub fn summary_lines(report: &Report) -> Vec<SummaryLine> {
    let mut lines = vec![
        SummaryLine::new(LineStyle::Header, "===== Load Test Report ====="),
        SummaryLine::new(
            LineStyle::Plain,
            format!("Total time: {:.3?}", report.elapsed()),
        ),
        SummaryLine::new(
            LineStyle::Plain,
            format!("Total requests: {}", report.total_requests()),
        ),
        SummaryLine::new(
            LineStyle::Success,
            format!(
                "Successful requests (HTTP {}): {}",
                HIGHLIGHTED_STATUS,
                report.status_count(HIGHLIGHTED_STATUS)
            ),
        ),
    ];

    let mut others = report
        .status_counts()
        .iter()
        .filter(|(status, _)| **status != HIGHLIGHTED_STATUS)
        .peekable();
    if others.peek().is_some() {
        lines.push(SummaryLine::new(
            LineStyle::Warning,
            "Distribution of other HTTP status codes:",
        ));
        for (status, count) in others {
            if *status >= FAILED_STATUS_MIN {
                lines.push(SummaryLine::new(
                    LineStyle::Failure,
                    format!("  Failed requests (HTTP {}): {}", status, count),
                ));
            } else {
                lines.push(SummaryLine::new(
                    LineStyle::Plain,
                    format!("  - HTTP {}: {}", status, count),
                ));
            }
        }
    }

    if report.network_errors() > 0 {
        lines.push(SummaryLine::new(
            LineStyle::Failure,
            format!("Network errors: {}", report.network_errors()),
        ));
    }

    lines.push(SummaryLine::new(
        LineStyle::Throughput,
        format!(
            "Requests per second: {}",
            format_x100(throughput_x100(report))
        ),
    ));
    lines
}

use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::Report;

use super::lines::{LineStyle, SummaryLine, format_x100, summary_lines, throughput_x100};

fn use_color(no_color: bool) -> bool {
    !no_color && std::io::stdout().is_terminal()
}

const fn line_color(style: LineStyle) -> Option<Color> {
    match style {
        LineStyle::Header => Some(Color::Green),
        LineStyle::Plain => None,
        LineStyle::Success => Some(Color::Cyan),
        LineStyle::Warning => Some(Color::Yellow),
        LineStyle::Failure => Some(Color::Red),
        LineStyle::Throughput => Some(Color::Magenta),
    }
}

fn render(line: &SummaryLine, color: bool) -> String {
    match line_color(line.style) {
        Some(fg) if color => line.text.as_str().with(fg).to_string(),
        Some(_) | None => line.text.clone(),
    }
}

pub fn print_start_banner(url: &str, no_color: bool) {
    let text = format!("Starting the load test for {}...", url);
    if use_color(no_color) {
        println!("{}", text.with(Color::Cyan));
    } else {
        println!("{text}");
    }
}

#[must_use]
pub fn report_json(report: &Report) -> serde_json::Value {
    serde_json::json!({
        "elapsed_ms": report.elapsed().as_millis(),
        "total_requests": report.total_requests(),
        "status_counts": report.status_counts(),
        "network_errors": report.network_errors(),
        "requests_per_second": format_x100(throughput_x100(report))
    })
}

/// Prints the report to stdout in the requested format.
///
/// # Errors
///
/// Returns an error if the JSON payload cannot be serialized.
pub fn print_report(report: &Report, format: OutputFormat, no_color: bool) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            let color = use_color(no_color);
            println!();
            for line in summary_lines(report) {
                println!("{}", render(&line, color));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report_json(report))?;
            println!("{json}");
        }
    }
    Ok(())
}

//! Rendering of finished runs for the console.
mod lines;
mod output;


pub use lines::{LineStyle, SummaryLine, format_x100, summary_lines, throughput_x100};
pub use output::{print_report, print_start_banner, report_json};

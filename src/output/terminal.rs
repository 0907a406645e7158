//! Terminal output with colors.

use super::Entry;
use crate::models::SubnetReport;
use colored::Colorize;

/// Render each entry as a labelled block, invalid inputs in red.
pub fn render_terminal(entries: &[Entry]) -> String {
    entries
        .iter()
        .flat_map(|entry| {
            let input = entry.input_text();
            match &entry.outcome {
                Ok(report) => report_lines(&input, report),
                Err(e) => vec![format!(
                    "{} {} {}",
                    input.bold(),
                    e.kind().on_red(),
                    e.to_string().red()
                )],
            }
        })
        .map(|line| line + "\n")
        .collect()
}

fn report_lines(input: &str, report: &SubnetReport) -> Vec<String> {
    let class = report
        .class
        .map_or_else(|| "-".to_string(), |c| c.to_string());
    let scope = if report.private {
        "private".green()
    } else {
        "public".yellow()
    };
    let rows = [
        ("address", report.address.to_string()),
        ("binary address", report.binary_address.clone()),
        ("subnet mask", report.subnet_mask.to_string()),
        ("binary mask", report.binary_mask.clone()),
        ("inverted mask", report.inverted_mask.clone()),
        ("network", report.network.to_string()),
        ("broadcast", report.broadcast.to_string()),
        ("first usable", report.first_usable.clone()),
        ("penultimate usable", report.penultimate_usable.clone()),
        ("usable hosts", report.usable_hosts.to_string()),
        ("class", class),
    ];

    let mut lines = vec![input.bold().to_string()];
    lines.extend(
        rows.into_iter()
            .map(|(label, value)| format!("  {label:<20}{}", value.cyan())),
    );
    lines.push(format!("  {:<20}{scope}", "scope"));
    lines
}

use colored::Colorize;
use serde_json::json;

use crate::calculator::types::{CalculatorInput, ImpactReport, UNAVAILABLE};

/// Insert a comma between every group of three digits
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut output = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }
    output
}

pub fn format_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Two decimal places with thousands separators, e.g. `1,234.50`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    match fixed.split_once('.') {
        Some((whole, cents)) => format!("{}.{}", group_digits(whole), cents),
        None => fixed,
    }
}

/// Decomposition time with a magnitude suffix
pub fn format_decomposition(years: f64) -> String {
    if years >= 1e9 {
        format!("{:.1}B years", years / 1e9)
    } else if years >= 1e6 {
        format!("{:.1}M years", years / 1e6)
    } else if years >= 1e3 {
        format!("{:.1}k years", years / 1e3)
    } else {
        format!("{} years", years.round() as u64)
    }
}

pub fn format_report_text(input: &CalculatorInput, report: &ImpactReport) -> String {
    let mut output = String::new();

    output.push_str(&"Your Plastic Bag Impact".bold().to_string());
    output.push('\n');
    output.push_str(
        &format!(
            "{} bags/week at S${:.2} per bag over {} years",
            input.bags_per_week, input.cost_per_bag, input.usage_years
        )
        .bright_black()
        .to_string(),
    );
    output.push('\n');
    output.push_str(&"━".repeat(48));
    output.push('\n');

    let rows = [
        ("Weekly usage", format!("{} bags", report.weekly_usage)),
        ("Annual usage", format!("{} bags", report.annual_usage)),
        ("Total usage", format!("{} bags", report.total_usage)),
        ("Total cost", format!("S${}", report.total_cost)),
        ("Decomposition", report.decomposition.clone()),
    ];

    for (label, value) in rows {
        let value = if report.is_available() {
            value.green().to_string()
        } else {
            UNAVAILABLE.yellow().to_string()
        };
        output.push_str(&format!("{:<16} {}\n", label, value));
    }

    output
}

pub fn format_report_json(input: &CalculatorInput, report: &ImpactReport) -> String {
    let value = json!({
        "input": input,
        "available": report.is_available(),
        "report": report,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

pub fn format_report_compact(report: &ImpactReport) -> String {
    format!(
        "weekly={} annual={} total={} cost={} decomposition={}",
        report.weekly_usage,
        report.annual_usage,
        report.total_usage,
        report.total_cost,
        report.decomposition
    )
}

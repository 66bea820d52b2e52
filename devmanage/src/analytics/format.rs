//! Display formatting helpers

use crate::database::ProjectStatus;

/// Format an amount with thousands separators and at most two decimals,
/// e.g. `R55,000` or `R-1,234.5`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let mut out = format!("{}{}{}", symbol, sign, group_thousands(whole));

    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(".{}", fraction / 10));
        } else {
            out.push_str(&format!(".{:02}", fraction));
        }
    }

    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Signed one-decimal change between two periods; `"+100%"` when there is
/// no previous value to compare against.
pub fn percentage_change(current: f64, previous: f64) -> String {
    if previous == 0.0 {
        return "+100%".to_string();
    }

    let change = (current - previous) / previous * 100.0;
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, change)
}

/// CSS class used by status badges
pub fn status_css_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "status-active",
        ProjectStatus::Started => "status-in-progress",
        ProjectStatus::OnHold => "status-on-hold",
        ProjectStatus::Completed => "status-completed",
    }
}

/// Short label shown on project cards
pub fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Started => "In Progress",
        other => other.as_str(),
    }
}

//! Display formatting for currency amounts.
//!
//! The engine returns raw `f64` values; rounding and grouping happen here,
//! at the presentation boundary.

/// Format an amount with thousands grouping and two decimals, prefixed with
/// the currency symbol when one is given.
///
/// `format_amount(3162277.66, Some("Rp"))` renders as `Rp 3,162,277.66`.
pub fn format_amount(amount: f64, currency: Option<&str>) -> String {
    let grouped = group_thousands(amount);
    match currency {
        Some(symbol) => format!("{symbol} {grouped}"),
        None => grouped,
    }
}

fn group_thousands(amount: f64) -> String {
    let rendered = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

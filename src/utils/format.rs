// Display formatting for report figures and series labels.

/// Thousands-separated amount with a fixed number of decimals.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole-dollar USD amount, e.g. `$60,000`.
pub fn format_usd(value: f64) -> String {
    format!("${}", format_amount(value, 0))
}

/// Percentage with the given number of decimals, e.g. `12.5%`.
pub fn format_pct(value: f64, decimals: usize) -> String {
    format!("{}%", format_amount(value, decimals))
}

/// Asset amount with its ticker symbol, e.g. `0.1234 BTC`.
pub fn format_asset(value: f64, decimals: usize, symbol: &str) -> String {
    format!("{} {}", format_amount(value, decimals), symbol)
}

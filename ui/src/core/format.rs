//! Formatting helpers for presenting metrics.

/// Integer with `,` thousands separators: `1444000` → `"1,444,000"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Compact axis tick label: `400000` → `"400k"`, `1500000` → `"1.5M"`.
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        trim_decimal(value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        trim_decimal(value / 1_000.0, "k")
    } else {
        trim_decimal(value, "")
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}{suffix}", value.round() as i64)
    } else {
        format!("{value:.1}{suffix}")
    }
}

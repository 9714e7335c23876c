//! Display formatting for currency amounts and timestamps.

use chrono::{DateTime, Utc};
use shared::Amount;

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Render a USDT amount for display with two decimals and grouping.
pub fn format_usdt(amount: &Amount) -> String {
    format!("{} USDT", format_number(amount.to_f64(), 2))
}

/// Short human-readable form of a server timestamp.
pub fn format_timestamp(timestamp: &Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number(999.0, 0), "999");
    }

    #[test]
    fn test_format_usdt() {
        assert_eq!(format_usdt(&Amount::new("1500.25")), "1,500.25 USDT");
        assert_eq!(format_usdt(&Amount::new("0")), "0.00 USDT");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&None), "-");
        let t = "2024-03-01T10:15:00Z".parse().unwrap();
        assert_eq!(format_timestamp(&Some(t)), "2024-03-01 10:15");
    }
}

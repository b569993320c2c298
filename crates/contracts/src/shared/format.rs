//! Display formatting for money and counts (en-PH conventions)

/// Philippine peso sign
pub const PESO_SIGN: char = '₱';

/// Inserts `,` between digit triads of an unsigned integer string
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats an amount as Philippine pesos with two decimals
///
/// # Examples
/// ```
/// use contracts::shared::format::format_peso;
/// assert_eq!(format_peso(1234.5), "₱1,234.50");
/// assert_eq!(format_peso(-80.0), "-₱80.00");
/// ```
pub fn format_peso(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let negative = value < 0.0 && formatted != "0.00";

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        PESO_SIGN,
        group_thousands(integer_part),
        decimal_part
    )
}

/// Missing amounts are shown as zero
pub fn format_peso_opt(value: Option<f64>) -> String {
    format_peso(value.unwrap_or(0.0))
}

/// Integer with `,` separators
pub fn format_count(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

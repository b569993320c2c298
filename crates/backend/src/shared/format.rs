/// Форматирует число с разделителями тысяч: 1234567 -> "1,234,567"
pub fn format_number(n: usize) -> String {
    contracts::shared::format::format_count(n as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }
}

/// Helper trait for printing counts the way the dashboard does ("1,234,567")
pub trait WithSeparators {
    fn with_separators(&self) -> String;
}

impl WithSeparators for u64 {
    fn with_separators(&self) -> String {
        let digits = self.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl WithSeparators for f64 {
    /// Rounds to the nearest whole play
    fn with_separators(&self) -> String {
        if !self.is_finite() {
            return self.to_string();
        }
        let rounded = self.round();
        let magnitude = (rounded.abs() as u64).with_separators();
        if rounded < 0.0 {
            format!("-{magnitude}")
        } else {
            magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_grouping() {
        assert_eq!(0u64.with_separators(), "0");
        assert_eq!(999u64.with_separators(), "999");
        assert_eq!(1_000u64.with_separators(), "1,000");
        assert_eq!(12_345_678u64.with_separators(), "12,345,678");
    }

    #[test]
    fn test_float_grouping() {
        assert_eq!(1234.4_f64.with_separators(), "1,234");
        assert_eq!(1234.6_f64.with_separators(), "1,235");
        assert_eq!((-4000.0_f64).with_separators(), "-4,000");
        assert_eq!((-0.2_f64).with_separators(), "0");
    }
}

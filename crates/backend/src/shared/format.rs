/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use beneficiary_reports::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Денежный формат pt-BR: "R$ ", точка между триадами, запятая перед копейками
///
/// # Примеры
/// ```
/// use beneficiary_reports::shared::format::format_brl;
/// assert_eq!(format_brl(1234.5), "R$ 1.234,50");
/// assert_eq!(format_brl(0.0), "R$ 0,00");
/// ```
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return format!("R$ {}", value.to_string().to_lowercase());
    }

    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("R$ {}{},{}", sign, group_thousands(int_part), frac_part)
}

/// Вставляет точку между триадами строки из цифр
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234), "1.234");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(12.0), "R$ 12,00");
        assert_eq!(format_brl(0.5), "R$ 0,50");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(-1234.5), "R$ -1.234,50");
        assert_eq!(format_brl(-0.25), "R$ -0,25");
    }

    #[test]
    fn test_format_brl_non_finite() {
        assert_eq!(format_brl(f64::NAN), "R$ nan");
        assert_eq!(format_brl(f64::INFINITY), "R$ inf");
    }
}

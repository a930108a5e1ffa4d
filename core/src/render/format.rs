//! Value and label text

/// `value` with `precision` decimals, followed by ` unit` when set
pub fn format_value(value: f64, precision: u32, unit: Option<&str>) -> String {
    let number = format_number(value, precision);
    match unit.filter(|u| !u.is_empty()) {
        Some(unit) => format!("{number} {unit}"),
        None => number,
    }
}

pub fn format_percentage(percentage: f64, precision: u32) -> String {
    format!("{}%", format_number(percentage, precision))
}

/// Share of `part` in `whole` as a percentage, 0 when there is no whole
pub fn percentage(part: f64, whole: Option<f64>) -> f64 {
    match whole {
        Some(whole) if whole != 0.0 && whole.is_finite() && part.is_finite() => part / whole * 100.0,
        _ => 0.0,
    }
}

/// Decimals beyond this are clamped
const MAX_DECIMALS: u32 = 100;

fn format_number(value: f64, precision: u32) -> String {
    let text = format!("{value:.prec$}", prec = precision.min(MAX_DECIMALS) as usize);
    // drop the sign from a rounded "-0.00"
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        return text[1..].to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_with_units() {
        assert_eq!(format_value(1234.567, 0, Some("W")), "1235 W");
        assert_eq!(format_value(1.5, 2, None), "1.50");
        assert_eq!(format_value(3.0, 1, Some("")), "3.0");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_value(-0.001, 1, None), "0.0");
        assert_eq!(format_value(-1.0, 0, None), "-1");
    }

    #[test]
    fn huge_precision_is_clamped() {
        let text = format_value(1.5, u32::MAX, None);
        assert_eq!(text.len(), "1.".len() + MAX_DECIMALS as usize);
        assert!(text.starts_with("1.50"));
    }

    #[test]
    fn percentages() {
        assert_eq!(percentage(25.0, Some(200.0)), 12.5);
        assert_eq!(percentage(25.0, Some(0.0)), 0.0);
        assert_eq!(percentage(25.0, None), 0.0);
        assert_eq!(format_percentage(12.5, 1), "12.5%");
    }
}

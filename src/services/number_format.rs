//! Display formatting shared by the text, CSV-adjacent and chart outputs.
//!
//! - Amounts use `,` thousands separators; the prefix sits before the sign
//!   (`$-1,234`).
//! - Percentages carry one decimal.
//! - Infinite payback and ROI are spelled out instead of printed as `inf`.

use crate::domain::currency::Currency;

pub fn format_number(value: f64, decimals: usize, prefix: &str, suffix: &str) -> String {
    if !value.is_finite() {
        return format!("{prefix}{value}{suffix}");
    }

    let digits = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{prefix}{sign}{grouped}.{fraction}{suffix}"),
        None => format!("{prefix}{sign}{grouped}{suffix}"),
    }
}

pub fn format_money(value: f64, currency: Currency) -> String {
    format_number(value, 0, currency.symbol(), "")
}

pub fn format_percent(value: f64) -> String {
    if value.is_infinite() && value > 0.0 {
        return "Unbounded".to_string();
    }
    format!("{value:.1}%")
}

pub fn format_payback(months: f64) -> String {
    if months.is_infinite() {
        return "Never".to_string();
    }
    format!("{months:.1} months")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0.0, 0, "", ""), "0");
        assert_eq!(format_number(999.0, 0, "", ""), "999");
        assert_eq!(format_number(1_000.0, 0, "", ""), "1,000");
        assert_eq!(format_number(4_716_280.295, 0, "$", ""), "$4,716,280");
        assert_eq!(format_number(123_456_789.0, 0, "", ""), "123,456,789");
    }

    #[test]
    fn format_number_keeps_requested_decimals() {
        assert_eq!(format_number(1_234.567, 2, "", " units"), "1,234.57 units");
        assert_eq!(format_number(12.0, 1, "", "%"), "12.0%");
    }

    #[test]
    fn format_number_places_prefix_before_sign() {
        assert_eq!(format_number(-1_234.0, 0, "$", ""), "$-1,234");
    }

    #[test]
    fn format_money_uses_the_currency_symbol() {
        assert_eq!(format_money(414_000.0, Currency::Eur), "€414,000");
        assert_eq!(format_money(450_000.0, Currency::Usd), "$450,000");
    }

    #[test]
    fn format_percent_uses_one_decimal() {
        assert_eq!(format_percent(1_389.351_672), "1389.4%");
        assert_eq!(format_percent(-100.0), "-100.0%");
        assert_eq!(format_percent(f64::INFINITY), "Unbounded");
    }

    #[test]
    fn format_payback_spells_out_never() {
        assert_eq!(format_payback(1.144_970_116), "1.1 months");
        assert_eq!(format_payback(f64::INFINITY), "Never");
    }
}

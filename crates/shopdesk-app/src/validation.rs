// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::format_description;

use crate::OrderLine;

pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidMoney,
    NegativeMoney,
    InvalidDate,
    InvalidInt,
    InvalidItems,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMoney => f.write_str("invalid money value"),
            Self::NegativeMoney => f.write_str("negative money value"),
            Self::InvalidDate => f.write_str("invalid date value"),
            Self::InvalidInt => f.write_str("invalid integer value"),
            Self::InvalidItems => f.write_str("invalid line items"),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

pub fn parse_required_cents(input: &str) -> ValidationResult<i64> {
    parse_cents(input.trim())
}

pub fn format_cents(cents: i64) -> String {
    let (sign, cents) = normalize_sign(cents);
    let dollars = cents / 100;
    let remainder = cents % 100;
    format!("{sign}${}.{:02}", comma_format(dollars), remainder)
}

pub fn format_compact_cents(cents: i64) -> String {
    let (sign, cents) = normalize_sign(cents);
    let dollars = (cents as f64) / 100.0;
    if dollars < 1000.0 {
        return format!("{sign}{}", format_cents(cents));
    }

    let (value, suffix) = if dollars < 1_000_000.0 {
        (dollars / 1000.0, "k")
    } else if dollars < 1_000_000_000.0 {
        (dollars / 1_000_000.0, "M")
    } else {
        (dollars / 1_000_000_000.0, "B")
    };

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{sign}${rounded:.0}{suffix}")
    } else {
        format!("{sign}${rounded:.1}{suffix}")
    }
}

pub fn parse_required_date(input: &str) -> ValidationResult<Date> {
    Date::parse(
        input.trim(),
        &format_description!("[year]-[month]-[day]"),
    )
    .map_err(|_| ValidationError::InvalidDate)
}

pub fn format_date(value: Option<Date>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    value
        .format(&format_description!("[year]-[month]-[day]"))
        .expect("date format is valid")
}

pub fn parse_required_int(input: &str) -> ValidationResult<i32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidInt);
    }
    let value = trimmed
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidInt)?;
    if value < 0 {
        return Err(ValidationError::InvalidInt);
    }
    Ok(value)
}

/// Line items as edited in the order form: `Name x2; Other Name x5`.
/// The quantity suffix is optional and defaults to 1. An empty input is an
/// empty item list.
pub fn parse_order_items(input: &str) -> ValidationResult<Vec<OrderLine>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for part in trimmed.split(';') {
        let part = part.trim();
        if part.is_empty() {
            return Err(ValidationError::InvalidItems);
        }
        let (name, quantity) = match part.rsplit_once(" x") {
            Some((name, digits)) if digits.bytes().all(|byte| byte.is_ascii_digit()) => {
                let quantity = digits
                    .parse::<u32>()
                    .map_err(|_| ValidationError::InvalidItems)?;
                (name.trim(), quantity)
            }
            _ => (part, 1),
        };
        if name.is_empty() || quantity == 0 {
            return Err(ValidationError::InvalidItems);
        }
        items.push(OrderLine {
            name: name.to_owned(),
            quantity,
        });
    }
    Ok(items)
}

pub fn format_order_items(items: &[OrderLine]) -> String {
    items
        .iter()
        .map(|line| format!("{} x{}", line.name, line.quantity))
        .collect::<Vec<_>>()
        .join("; ")
}

fn parse_cents(input: &str) -> ValidationResult<i64> {
    let clean = input.replace(',', "");
    if clean.starts_with('-') {
        return Err(ValidationError::NegativeMoney);
    }

    let clean = clean.strip_prefix('$').unwrap_or(&clean);
    if clean.is_empty() {
        return Err(ValidationError::InvalidMoney);
    }

    let parts = clean.split('.').collect::<Vec<_>>();
    if parts.len() > 2 {
        return Err(ValidationError::InvalidMoney);
    }

    let whole = parse_digits(parts[0], true)?;
    if whole > i64::MAX / 100 {
        return Err(ValidationError::InvalidMoney);
    }

    let mut frac = 0i64;
    if parts.len() == 2 {
        if parts[1].len() > 2 {
            return Err(ValidationError::InvalidMoney);
        }
        frac = parse_digits(parts[1], false)?;
        if parts[1].len() == 1 {
            frac = frac.checked_mul(10).ok_or(ValidationError::InvalidMoney)?;
        }
    }

    whole
        .checked_mul(100)
        .and_then(|value| value.checked_add(frac))
        .ok_or(ValidationError::InvalidMoney)
}

fn parse_digits(input: &str, allow_empty: bool) -> ValidationResult<i64> {
    if input.is_empty() {
        if allow_empty {
            return Ok(0);
        }
        return Err(ValidationError::InvalidMoney);
    }
    if !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::InvalidMoney);
    }
    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidMoney)
}

fn comma_format(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let mut chars = digits.chars().collect::<Vec<_>>();
    let mut count = 0usize;
    while let Some(ch) = chars.pop() {
        if count == 3 {
            out.push(',');
            count = 0;
        }
        out.push(ch);
        count += 1;
    }
    out.chars().rev().collect()
}

fn normalize_sign(cents: i64) -> (&'static str, i64) {
    if cents >= 0 {
        return ("", cents);
    }
    if cents == i64::MIN {
        ("-", i64::MAX)
    } else {
        ("-", -cents)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ValidationError, format_cents, format_compact_cents, format_date, format_order_items,
        parse_order_items, parse_required_cents, parse_required_date, parse_required_int,
    };
    use crate::OrderLine;
    use std::collections::BTreeMap;
    use time::{Date, Month};

    #[test]
    fn parse_required_cents_test() {
        let cases = BTreeMap::from([
            ("100", 10_000),
            ("100.5", 10_050),
            ("100.05", 10_005),
            ("$1,234.56", 123_456),
            (".75", 75),
            ("0.99", 99),
        ]);
        for (input, expected) in cases {
            let got = parse_required_cents(input).expect("money should parse");
            assert_eq!(got, expected, "input {input}");
        }
    }

    #[test]
    fn parse_required_cents_invalid() {
        for input in ["", "12.345", "abc", "1.2.3"] {
            assert!(parse_required_cents(input).is_err(), "input {input}");
        }
    }

    #[test]
    fn parse_cents_rejects_negative() {
        for input in ["-$5.00", "-5.00", "-$1,234.56"] {
            let err = parse_required_cents(input).expect_err("negative should fail");
            assert_eq!(err, ValidationError::NegativeMoney);
        }
    }

    #[test]
    fn format_cents_test() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(123_456), "$1,234.56");
        assert_eq!(format_cents(-500), "-$5.00");
    }

    #[test]
    fn parse_cents_format_roundtrip() {
        for cents in [0_i64, 1, 99, 100, 123_456] {
            let formatted = format_cents(cents);
            let parsed = parse_required_cents(&formatted).expect("formatted cents should parse");
            assert_eq!(parsed, cents, "formatted={formatted}");
        }
    }

    #[test]
    fn format_compact_cents_test() {
        let cases = [
            (0, "$0.00"),
            (999, "$9.99"),
            (99_999, "$999.99"),
            (100_000, "$1k"),
            (123_456, "$1.2k"),
            (4_523_189, "$45.2k"),
            (100_000_000, "$1M"),
            (130_000_000, "$1.3M"),
            (-250_000, "-$2.5k"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_compact_cents(input), expected, "input={input}");
        }
    }

    #[test]
    fn parse_required_date_test() {
        let parsed = parse_required_date(" 2023-10-26 ").expect("date should parse");
        assert_eq!(parsed.to_string(), "2023-10-26");

        for input in ["", "10/26/2023", "not-a-date", "2023-13-01"] {
            assert!(parse_required_date(input).is_err(), "input {input}");
        }
    }

    #[test]
    fn format_date_test() {
        assert_eq!(format_date(None), "");
        let value = Date::from_calendar_date(2023, Month::October, 26).expect("valid date");
        assert_eq!(format_date(Some(value)), "2023-10-26");
    }

    #[test]
    fn parse_required_int_test() {
        assert_eq!(parse_required_int("42").expect("int should parse"), 42);
        assert_eq!(parse_required_int(" 7 ").expect("int should parse"), 7);
        for input in ["", "abc", "-5", "1.5"] {
            assert!(parse_required_int(input).is_err(), "input {input}");
        }
    }

    #[test]
    fn parse_order_items_test() {
        let items = parse_order_items("T-Shirt x2; Socks x5").expect("items should parse");
        assert_eq!(items, vec![
            OrderLine {
                name: "T-Shirt".to_owned(),
                quantity: 2,
            },
            OrderLine {
                name: "Socks".to_owned(),
                quantity: 5,
            },
        ]);
    }

    #[test]
    fn parse_order_items_defaults_quantity_to_one() {
        let items = parse_order_items("Jacket").expect("items should parse");
        assert_eq!(items, vec![OrderLine {
            name: "Jacket".to_owned(),
            quantity: 1,
        }]);
    }

    #[test]
    fn parse_order_items_empty_input_is_empty_list() {
        assert!(parse_order_items("").expect("empty is valid").is_empty());
        assert!(parse_order_items("   ").expect("blank is valid").is_empty());
    }

    #[test]
    fn parse_order_items_invalid() {
        for input in ["; T-Shirt", "T-Shirt x0", "Socks x", "T-Shirt x2;;"] {
            assert!(parse_order_items(input).is_err(), "input {input}");
        }
    }

    #[test]
    fn order_items_format_roundtrip() {
        let items = vec![
            OrderLine {
                name: "Coffee Mug".to_owned(),
                quantity: 1,
            },
            OrderLine {
                name: "Tote Bag".to_owned(),
                quantity: 3,
            },
        ];
        let formatted = format_order_items(&items);
        assert_eq!(formatted, "Coffee Mug x1; Tote Bag x3");
        assert_eq!(
            parse_order_items(&formatted).expect("formatted items parse"),
            items
        );
    }
}

//! Cell formatting shared by the report tables.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::domain::Money;

/// Placeholder for a value the league has no record of.
pub const EMPTY: &str = "-";

/// `$1,234.50`, negatives as `-$12.00`.
#[must_use]
pub fn money(amount: Money) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{cents}")
}

/// No record renders as `-`, an explicit zero as `$0.00`.
#[must_use]
pub fn optional_money(amount: Option<Money>) -> String {
    amount.map_or_else(|| EMPTY.to_string(), money)
}

/// `1st`, `2nd`, `3rd`, `11th`.
#[must_use]
pub fn ordinal(position: u32) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}

#[must_use]
pub fn position(position: Option<u32>) -> String {
    position.map_or_else(|| EMPTY.to_string(), ordinal)
}

#[must_use]
pub fn date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| EMPTY.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

#[must_use]
pub fn time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| EMPTY.to_string(), |t| t.format("%H:%M").to_string())
}

#[must_use]
pub fn week(week: Option<u32>) -> String {
    week.map_or_else(|| EMPTY.to_string(), |w| w.to_string())
}

#[must_use]
pub fn text(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| EMPTY.to_string(), str::to_string)
}

#[must_use]
pub fn average(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(dec!(0)), "$0.00");
        assert_eq!(money(dec!(12.5)), "$12.50");
        assert_eq!(money(dec!(1234.5)), "$1,234.50");
        assert_eq!(money(dec!(1000000)), "$1,000,000.00");
        assert_eq!(money(dec!(-40)), "-$40.00");
    }

    #[test]
    fn missing_prize_differs_from_zero() {
        assert_eq!(optional_money(None), "-");
        assert_eq!(optional_money(Some(dec!(0))), "$0.00");
    }

    #[test]
    fn ordinals() {
        let rendered: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            rendered,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st", "111th"]
        );
    }

    #[test]
    fn absent_values_render_as_dash() {
        assert_eq!(position(None), "-");
        assert_eq!(date(None), "-");
        assert_eq!(time(None), "-");
        assert_eq!(text(Some("  ")), "-");
        assert_eq!(
            date(NaiveDate::from_ymd_opt(2024, 3, 7)),
            "2024-03-07"
        );
    }
}

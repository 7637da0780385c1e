//! Monetary and scoring types.

use rust_decimal::Decimal;

/// Money represented as a Decimal for precision.
pub type Money = Decimal;

/// League points awarded for a finishing position.
pub type Points = i64;

/// Sum optional prize amounts, counting a missing prize as zero.
pub fn total_prizes<'a>(prizes: impl IntoIterator<Item = &'a Option<Money>>) -> Money {
    prizes
        .into_iter()
        .map(|prize| prize.unwrap_or(Decimal::ZERO))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_prizes_treats_absent_as_zero() {
        let prizes = vec![Some(dec!(100.00)), None, Some(dec!(0)), Some(dec!(25.50))];
        assert_eq!(total_prizes(&prizes), dec!(125.50));
    }

    #[test]
    fn total_prizes_of_nothing_is_zero() {
        let prizes: Vec<Option<Money>> = vec![];
        assert_eq!(total_prizes(&prizes), Decimal::ZERO);
    }
}

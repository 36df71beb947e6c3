use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decimal_amount_converts_to_f64() {
        let amount = Decimal::from_str("1250.75").expect("decimal");
        assert_eq!(decimal_to_f64(amount, "rent").expect("convert"), 1250.75);
    }

    #[test]
    fn iso_date_parsing_ignores_surrounding_whitespace() {
        assert_eq!(
            parse_iso_date(" 2024-03-05 "),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_iso_date("03/05/2024"), None);
    }
}

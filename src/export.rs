// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const CSV_HEADER: &str = "Date,Description,Category,Amount";

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Two decimal places, halves rounded away from zero.
pub fn fixed2(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Serializes expenses in the given order. Rows are joined by `\n`.
pub fn serialize_csv<'a, I>(expenses: I) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut lines = vec![CSV_HEADER.to_string()];
    for e in expenses {
        lines.push(format!(
            "{},{},{},{}",
            e.date.format("%m/%d/%Y"),
            quote(&e.description),
            e.category,
            fixed2(e.amount)
        ));
    }
    lines.join("\n")
}

pub fn default_filename(today: NaiveDate) -> String {
    format!("expenses-{}.csv", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn exp(desc: &str, amount: &str) -> Expense {
        Expense {
            id: "1".into(),
            amount: amount.parse().unwrap(),
            description: desc.into(),
            category: Category::Shopping,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            created_at: "2024-01-05T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn header_only_for_empty_input() {
        let none: Vec<Expense> = Vec::new();
        assert_eq!(serialize_csv(&none), CSV_HEADER);
    }

    #[test]
    fn quotes_are_doubled() {
        let rows = [exp("He said \"hi\"", "12.5")];
        let csv = serialize_csv(&rows);
        assert_eq!(
            csv,
            "Date,Description,Category,Amount\n01/05/2024,\"He said \"\"hi\"\"\",Shopping,12.50"
        );
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(fixed2("3".parse().unwrap()), "3.00");
        assert_eq!(fixed2("2.675".parse().unwrap()), "2.68");
        assert_eq!(fixed2("0.125".parse().unwrap()), "0.13");
        assert_eq!(fixed2("1000000".parse().unwrap()), "1000000.00");
    }

    #[test]
    fn filename_uses_iso_date() {
        let d = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(default_filename(d), "expenses-2024-07-04.csv");
    }
}

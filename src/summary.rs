// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryBreakdown, Expense, MonthTotal, Summary};
use crate::utils::{month_bounds, months_back};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

pub const TREND_MONTHS: u32 = 6;

fn sum_between(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Decimal {
    expenses
        .iter()
        .filter(|e| start <= e.date && e.date <= end)
        .map(|e| e.amount)
        .sum()
}

/// Aggregates the full expense list as seen on `today`.
pub fn summarize(expenses: &[Expense], today: NaiveDate) -> Summary {
    let total_spending: Decimal = expenses.iter().map(|e| e.amount).sum();

    let (month_start, month_end) = month_bounds(today);
    let monthly_spending = sum_between(expenses, month_start, month_end);

    let expense_count = expenses.len();
    let average_expense = if expense_count > 0 {
        total_spending / Decimal::from(expense_count)
    } else {
        Decimal::ZERO
    };

    let mut category_breakdown = CategoryBreakdown::default();
    for e in expenses {
        category_breakdown.add(e.category, e.amount);
    }

    let mut monthly_trend = Vec::with_capacity(TREND_MONTHS as usize);
    for back in (0..TREND_MONTHS).rev() {
        let anchor = months_back(today, back);
        let (start, end) = month_bounds(anchor);
        monthly_trend.push(MonthTotal {
            month: anchor.format("%b").to_string(),
            year: anchor.year(),
            month_number: anchor.month(),
            amount: sum_between(expenses, start, end),
        });
    }

    Summary {
        total_spending,
        monthly_spending,
        average_expense,
        expense_count,
        category_breakdown,
        monthly_trend,
    }
}

/// Summary against the local calendar date.
pub fn summarize_now(expenses: &[Expense]) -> Summary {
    summarize(expenses, chrono::Local::now().date_naive())
}

/// Percentage of `total` that `amount` represents, one decimal place.
pub fn category_share(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (amount * Decimal::ONE_HUNDRED / total).round_dp(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn exp(amount: i64, cat: Category, date: &str) -> Expense {
        Expense {
            id: format!("{amount}-{date}"),
            amount: Decimal::from(amount),
            description: "x".into(),
            category: cat,
            date: d(date),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn empty_summary_is_all_zero() {
        let s = summarize(&[], d("2024-06-15"));
        assert_eq!(s.total_spending, Decimal::ZERO);
        assert_eq!(s.monthly_spending, Decimal::ZERO);
        assert_eq!(s.average_expense, Decimal::ZERO);
        assert_eq!(s.expense_count, 0);
        assert!(s.category_breakdown.iter().all(|(_, v)| v.is_zero()));
        assert_eq!(s.category_breakdown.iter().count(), 6);
        assert_eq!(s.monthly_trend.len(), 6);
    }

    #[test]
    fn totals_and_breakdown() {
        let all = vec![
            exp(50, Category::Food, "2024-01-15"),
            exp(20, Category::Food, "2024-02-01"),
        ];
        let s = summarize(&all, d("2024-02-20"));
        assert_eq!(s.total_spending, Decimal::from(70));
        assert_eq!(s.monthly_spending, Decimal::from(20));
        assert_eq!(s.average_expense, Decimal::from(35));
        assert_eq!(s.category_breakdown.get(Category::Food), Decimal::from(70));
        for c in Category::ALL.into_iter().filter(|c| *c != Category::Food) {
            assert_eq!(s.category_breakdown.get(c), Decimal::ZERO);
        }
    }

    #[test]
    fn order_does_not_matter() {
        let mut all = vec![
            exp(5, Category::Bills, "2024-03-31"),
            exp(7, Category::Shopping, "2024-04-01"),
            exp(11, Category::Bills, "2023-12-01"),
        ];
        let a = summarize(&all, d("2024-04-10"));
        all.reverse();
        let b = summarize(&all, d("2024-04-10"));
        assert_eq!(a, b);
    }

    #[test]
    fn trend_spans_six_months_oldest_first_across_year_end() {
        let all = vec![
            exp(3, Category::Other, "2023-10-31"),
            exp(4, Category::Other, "2023-11-01"),
            exp(9, Category::Other, "2024-02-29"),
            exp(100, Category::Other, "2024-03-01"),
        ];
        let s = summarize(&all, d("2024-02-29"));
        let labels: Vec<&str> = s.monthly_trend.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(labels, ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert_eq!(s.monthly_trend[0].year, 2023);
        assert_eq!(s.monthly_trend[5].year, 2024);
        assert_eq!(s.monthly_trend[1].amount, Decimal::from(3));
        assert_eq!(s.monthly_trend[2].amount, Decimal::from(4));
        assert_eq!(s.monthly_trend[5].amount, Decimal::from(9));
        // future-dated expenses still count toward the total
        assert_eq!(s.total_spending, Decimal::from(116));
        assert_eq!(s.monthly_spending, Decimal::from(9));
    }

    #[test]
    fn trend_from_month_end_does_not_skip_short_months() {
        let s = summarize(&[], d("2024-05-31"));
        let labels: Vec<&str> = s.monthly_trend.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(labels, ["Dec", "Jan", "Feb", "Mar", "Apr", "May"]);
    }

    #[test]
    fn share_rounds_to_one_decimal() {
        assert_eq!(
            category_share(Decimal::from(1), Decimal::from(3)).to_string(),
            "33.3"
        );
        assert_eq!(category_share(Decimal::ONE, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn json_amounts_are_numbers() {
        let all = vec![
            exp(50, Category::Food, "2024-01-15"),
            exp(20, Category::Food, "2024-02-01"),
        ];
        let v = serde_json::to_value(summarize(&all, d("2024-02-20"))).unwrap();
        assert_eq!(v["totalSpending"], serde_json::json!(70.0));
        assert_eq!(v["monthlySpending"], serde_json::json!(20.0));
        assert_eq!(v["averageExpense"], serde_json::json!(35.0));
        assert_eq!(v["expenseCount"], serde_json::json!(2));
        assert_eq!(v["categoryBreakdown"]["Food"], serde_json::json!(70.0));
        assert_eq!(v["categoryBreakdown"]["Bills"], serde_json::json!(0.0));
        assert_eq!(v["monthlyTrend"][5]["amount"], serde_json::json!(20.0));
        assert_eq!(v["monthlyTrend"][5]["month"], "Feb");
    }
}

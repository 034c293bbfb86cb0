// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use rust_decimal::Decimal;
use spendlog::models::{Category, CategoryFilter, Expense, FilterSpec};
use spendlog::store::{ExpenseStore, SqliteStore};
use spendlog::{cli, commands, db, filter, summary};

fn exp(id: &str, amount: i64, date: &str) -> Expense {
    Expense {
        id: id.into(),
        amount: Decimal::from(amount),
        description: format!("expense {id}"),
        category: Category::Food,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        created_at: "2024-02-01T12:00:00Z".parse().unwrap(),
    }
}

#[test]
fn two_food_expenses_scenario() {
    let all = vec![exp("1", 50, "2024-01-15"), exp("2", 20, "2024-02-01")];

    let food = FilterSpec {
        category: CategoryFilter::Only(Category::Food),
        ..Default::default()
    };
    assert_eq!(filter::filter_expenses(&all, &food).len(), 2);

    let from_feb = FilterSpec {
        start_date: NaiveDate::from_ymd_opt(2024, 2, 1),
        ..Default::default()
    };
    let only = filter::filter_expenses(&all, &from_feb);
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].id, "2");

    let s = summary::summarize(&all, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    assert_eq!(s.total_spending, Decimal::from(70));
    assert_eq!(s.category_breakdown.get(Category::Food), Decimal::from(70));
    for c in Category::ALL {
        if c != Category::Food {
            assert_eq!(s.category_breakdown.get(c), Decimal::ZERO);
        }
    }
}

#[test]
fn summary_now_counts_current_month() {
    let today = chrono::Local::now().date_naive();
    let this_month = today.with_day(1).unwrap();
    let all = vec![
        exp("a", 5, &this_month.to_string()),
        exp("b", 7, "2000-01-01"),
    ];
    let s = summary::summarize_now(&all);
    assert_eq!(s.monthly_spending, Decimal::from(5));
    assert_eq!(s.monthly_trend.len(), 6);
    assert_eq!(s.monthly_trend[5].month_number, today.month());
    assert_eq!(s.monthly_trend[5].amount, Decimal::from(5));
}

#[test]
fn summary_command_prints_for_stored_data() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    SqliteStore::new(&conn)
        .write_all(&[exp("1", 50, "2024-01-15")])
        .unwrap();
    let matches = cli::build_cli().get_matches_from(["spendlog", "summary"]);
    if let Some(("summary", sub)) = matches.subcommand() {
        commands::summary::handle(&conn, sub).unwrap();
    } else {
        panic!("no summary subcommand");
    }
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::open_book;
use crate::summary::category_share;
use crate::utils::{fmt_date_long, fmt_money, maybe_print_json, pretty_table, today};
use anyhow::Result;
use rusqlite::Connection;

const RECENT: usize = 5;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let book = open_book(conn)?;
    let s = book.summary(today());
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Total Spending", "This Month", "Average Expense", "Expenses"],
            vec![vec![
                fmt_money(s.total_spending),
                fmt_money(s.monthly_spending),
                fmt_money(s.average_expense),
                s.expense_count.to_string(),
            ]],
        )
    );

    let breakdown: Vec<Vec<String>> = s
        .category_breakdown
        .iter()
        .map(|(c, amt)| {
            vec![
                c.to_string(),
                fmt_money(amt),
                format!("{:.1}%", category_share(amt, s.total_spending)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], breakdown));

    let trend: Vec<Vec<String>> = s
        .monthly_trend
        .iter()
        .map(|m| vec![format!("{} {}", m.month, m.year), fmt_money(m.amount)])
        .collect();
    println!("{}", pretty_table(&["Month", "Spent"], trend));

    let recent = book.recent(RECENT);
    if !recent.is_empty() {
        let rows: Vec<Vec<String>> = recent
            .iter()
            .map(|e| {
                vec![
                    fmt_date_long(e.date),
                    e.description.clone(),
                    e.category.to_string(),
                    fmt_money(e.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Recent", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

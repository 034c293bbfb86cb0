// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{filter_from_args, open_book};
use crate::models::{Category, Expense, ExpenseInput};
use crate::utils::{fmt_date_long, fmt_money, maybe_print_json, parse_date, pretty_table, today};
use anyhow::{bail, Result};
use chrono::Utc;
use rusqlite::Connection;

fn category_arg(sub: &clap::ArgMatches) -> Result<Option<Category>> {
    Ok(sub
        .get_one::<String>("category")
        .map(|s| s.parse::<Category>())
        .transpose()?)
}

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let input = ExpenseInput {
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default(),
        category: category_arg(sub)?,
        date: Some(date),
    };

    let mut book = open_book(conn)?;
    let e = book.add(&input, Utc::now())?;
    println!(
        "Recorded {} on {} for '{}' ({}) [{}]",
        fmt_money(e.amount),
        fmt_date_long(e.date),
        e.description,
        e.category,
        e.id
    );
    Ok(())
}

pub fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").map(|s| s.trim()).unwrap_or_default();
    let mut book = open_book(conn)?;
    let Some(existing) = book.get(id) else {
        bail!("Expense '{}' not found", id);
    };

    let mut input = ExpenseInput::from_expense(existing);
    if let Some(a) = sub.get_one::<String>("amount") {
        input.amount = a.clone();
    }
    if let Some(d) = sub.get_one::<String>("description") {
        input.description = d.clone();
    }
    if let Some(c) = category_arg(sub)? {
        input.category = Some(c);
    }
    if let Some(d) = sub.get_one::<String>("date") {
        input.date = Some(parse_date(d)?);
    }

    let e = book.update(id, &input)?;
    println!(
        "Updated {}: {} on {} for '{}' ({})",
        e.id,
        fmt_money(e.amount),
        fmt_date_long(e.date),
        e.description,
        e.category
    );
    Ok(())
}

pub fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").map(|s| s.trim()).unwrap_or_default();
    let mut book = open_book(conn)?;
    if book.delete(id)? {
        println!("Removed expense {}", id);
    } else {
        println!("No expense with id {}; nothing removed", id);
    }
    Ok(())
}

pub fn clear(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        bail!("Refusing to delete every expense without --yes");
    }
    let mut book = open_book(conn)?;
    let n = book.expenses().len();
    book.clear()?;
    println!("Cleared {} expense(s)", n);
    Ok(())
}

/// Matching expenses plus the size of the unfiltered list.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<(Vec<Expense>, usize)> {
    let mut book = open_book(conn)?;
    book.set_filters(filter_from_args(sub)?);
    let mut rows: Vec<Expense> = book.filtered().into_iter().cloned().collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok((rows, book.expenses().len()))
}

pub fn count_line(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{} expense{}", total, if total == 1 { "" } else { "s" })
    } else {
        format!("{} of {} expenses", shown, total)
    }
}

pub fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (data, total) = query_rows(conn, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if total == 0 {
        println!("No expenses yet. Record one with `spendlog add`.");
        return Ok(());
    }
    if data.is_empty() {
        println!("No matching expenses. Try adjusting your filters.");
        return Ok(());
    }
    println!("{}", count_line(data.len(), total));
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|e| {
            vec![
                fmt_date_long(e.date),
                e.description.clone(),
                e.category.to_string(),
                fmt_money(e.amount),
                e.id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Category", "Amount", "Id"], rows)
    );
    Ok(())
}

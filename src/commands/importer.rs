// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::open_book;
use crate::models::{Category, ExpenseInput};
use crate::state::BookError;
use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};
use csv::ReaderBuilder;
use rusqlite::Connection;
use std::io::Read;

fn parse_csv_date(s: &str) -> Result<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(t, "%Y-%m-%d"))
        .with_context(|| format!("Invalid date '{}', expected MM/DD/YYYY or YYYY-MM-DD", s))
}

/// Reads rows laid out as `Date,Description,Category,Amount`.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<ExpenseInput>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let line = i + 2;
        let rec = result.with_context(|| format!("Read CSV line {}", line))?;
        let date_raw = rec.get(0).context("date missing")?;
        let description = rec.get(1).context("description missing")?.to_string();
        let category_raw = rec.get(2).context("category missing")?;
        let amount = rec.get(3).context("amount missing")?.trim().to_string();

        let date = parse_csv_date(date_raw).with_context(|| format!("Line {}", line))?;
        let category = category_raw
            .parse::<Category>()
            .with_context(|| format!("Line {}", line))?;
        out.push(ExpenseInput {
            amount,
            description,
            category: Some(category),
            date: Some(date),
        });
    }
    Ok(out)
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .map(|s| s.trim())
        .unwrap_or_default();
    let file = std::fs::File::open(path).with_context(|| format!("Open CSV {}", path))?;
    let inputs = parse_rows(file)?;

    let mut book = open_book(conn)?;
    let added = book
        .add_many(&inputs, Utc::now())
        .map_err(|(i, e)| match e {
            BookError::Storage(_) => anyhow!(e).context("Import write failed; nothing imported"),
            _ => anyhow!(e).context(format!("Row {} of {}; nothing imported", i + 1, path)),
        })?;
    println!("Imported {} expense(s) from {}", added.len(), path);
    Ok(())
}

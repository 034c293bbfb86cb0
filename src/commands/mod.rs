// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expenses;
pub mod summary;
pub mod exporter;
pub mod importer;
pub mod doctor;
pub mod settings;

use crate::models::{CategoryFilter, FilterSpec};
use crate::state::ExpenseBook;
use crate::store::SqliteStore;
use crate::utils::{parse_date, validation_rules};
use anyhow::{Context, Result};
use rusqlite::Connection;

/// Loads the stored expenses with the configured validation rules.
pub fn open_book(conn: &Connection) -> Result<ExpenseBook<SqliteStore<'_>>> {
    let book = ExpenseBook::open(SqliteStore::new(conn)).context("Load stored expenses")?;
    Ok(book.with_rules(validation_rules(conn)?))
}

/// Builds a filter from the shared `--category/--from/--to/--search` args.
pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<FilterSpec> {
    let category = match sub.get_one::<String>("category") {
        Some(s) => s.parse::<CategoryFilter>()?,
        None => CategoryFilter::All,
    };
    let start_date = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let end_date = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    let search_query = sub.get_one::<String>("search").cloned().unwrap_or_default();
    Ok(FilterSpec {
        category,
        start_date,
        end_date,
        search_query,
    })
}

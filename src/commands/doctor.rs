// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseInput;
use crate::store::{ExpenseStore, SqliteStore};
use crate::utils::{pretty_table, today};
use crate::validate::{validate, ValidationRules};
use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashSet;

/// `(issue, detail)` pairs for everything wrong with the stored list.
pub fn find_issues(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let store = SqliteStore::new(conn);

    // 1) Unreadable payload
    let expenses = match store.try_read_all() {
        Ok(v) => v,
        Err(e) => {
            rows.push(vec!["unreadable_store".into(), e.to_string()]);
            return Ok(rows);
        }
    };

    // 2) Records that would no longer pass validation, future dates included
    let rules = ValidationRules::up_to(today());
    let mut seen = HashSet::new();
    for e in &expenses {
        let report = validate(&ExpenseInput::from_expense(e), &rules);
        for (field, err) in report.errors() {
            rows.push(vec![format!("invalid_{}", field), format!("{} {}", e.id, err)]);
        }
        if e.description != e.description.trim() {
            rows.push(vec!["untrimmed_description".into(), e.id.clone()]);
        }
        // 3) Duplicate ids
        if !seen.insert(e.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), e.id.clone()]);
        }
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = find_issues(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{filter_from_args, open_book};
use crate::export::{default_filename, serialize_csv};
use crate::utils::today;
use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use tracing::debug;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.trim().to_string(),
        None => default_filename(today()),
    };

    let mut book = open_book(conn)?;
    book.set_filters(filter_from_args(sub)?);
    let rows = book.filtered();

    let body = match fmt.as_str() {
        "csv" => serialize_csv(rows.iter().copied()),
        "json" => serde_json::to_string_pretty(&rows)?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    };
    std::fs::write(&out, body).with_context(|| format!("Write {}", out))?;
    debug!(path = %out, count = rows.len(), format = %fmt, "exported");
    println!("Exported {} expense(s) to {}", rows.len(), out);
    Ok(())
}

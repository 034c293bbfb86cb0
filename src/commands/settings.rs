// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{
    parse_bool, pretty_table, reject_future_dates, set_setting, REJECT_FUTURE_DATES, SETTING_KEYS,
};
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        _ => show(conn)?,
    }
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let rows = vec![vec![
        REJECT_FUTURE_DATES.to_string(),
        reject_future_dates(conn)?.to_string(),
    ]];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let key = sub
        .get_one::<String>("key")
        .map(|s| s.trim().replace('-', "_"))
        .unwrap_or_default();
    let raw = sub.get_one::<String>("value").map(|s| s.as_str()).unwrap_or("");
    if !SETTING_KEYS.contains(&key.as_str()) {
        bail!("Unknown setting '{}' (known: {})", key, SETTING_KEYS.join(", "));
    }
    let value = parse_bool(raw)?;
    set_setting(conn, &key, &value.to_string())?;
    println!("{} = {}", key, value);
    Ok(())
}

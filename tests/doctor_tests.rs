// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendlog::store::STORAGE_KEY;
use spendlog::{cli, commands, db, utils};

fn setup(payload: &str) -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO storage(key, value) VALUES (?1, ?2)",
        [STORAGE_KEY, payload],
    )
    .unwrap();
    conn
}

#[test]
fn doctor_reports_invalid_and_duplicate_records() {
    let conn = setup(
        r#"[
        {"id":"a","amount":-4,"description":"Refund","category":"Other","date":"2024-01-01","createdAt":"2024-01-01T00:00:00Z"},
        {"id":"a","amount":4,"description":"ok","category":"Food","date":"2999-01-01","createdAt":"2024-01-01T00:00:00Z"}
    ]"#,
    );
    let issues = commands::doctor::find_issues(&conn).unwrap();
    let kinds: Vec<&str> = issues.iter().map(|r| r[0].as_str()).collect();
    assert!(kinds.contains(&"invalid_amount"));
    assert!(kinds.contains(&"invalid_date"));
    assert!(kinds.contains(&"duplicate_id"));
}

#[test]
fn doctor_reports_unreadable_store() {
    let conn = setup("not json");
    let issues = commands::doctor::find_issues(&conn).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0][0], "unreadable_store");
}

#[test]
fn config_set_accepts_dashed_keys_and_rejects_unknown() {
    let conn = setup("[]");
    let matches = cli::build_cli().get_matches_from([
        "spendlog", "config", "set", "--key", "reject-future-dates", "--value", "off",
    ]);
    let Some(("config", m)) = matches.subcommand() else {
        panic!("config command not parsed");
    };
    commands::settings::handle(&conn, m).unwrap();
    assert!(!utils::reject_future_dates(&conn).unwrap());

    let matches = cli::build_cli().get_matches_from([
        "spendlog", "config", "set", "--key", "currency", "--value", "true",
    ]);
    let Some(("config", m)) = matches.subcommand() else {
        panic!("config command not parsed");
    };
    let err = commands::settings::handle(&conn, m).unwrap_err();
    assert!(err.to_string().contains("Unknown setting"));
}

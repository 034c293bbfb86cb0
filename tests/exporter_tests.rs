// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rusqlite::Connection;
use spendlog::models::{Category, ExpenseInput};
use spendlog::state::ExpenseBook;
use spendlog::store::SqliteStore;
use spendlog::{cli, commands::exporter, db};
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let mut book = ExpenseBook::open(SqliteStore::new(&conn)).unwrap();
    for (amount, desc, cat, date) in [
        ("50", "Weekly run", Category::Food, "2024-01-15"),
        ("20", "He said \"hi\"", Category::Food, "2024-02-01"),
        ("9.99", "Cinema", Category::Entertainment, "2024-02-03"),
    ] {
        book.add(
            &ExpenseInput {
                amount: amount.into(),
                description: desc.into(),
                category: Some(cat),
                date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            },
            Utc::now(),
        )
        .unwrap();
    }
    conn
}

fn export(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["spendlog", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_csv_writes_filtered_rows_in_list_order() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("food.csv");
    let out_str = out_path.to_string_lossy().to_string();

    export(&conn, &["--category", "Food", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        "Date,Description,Category,Amount\n\
         02/01/2024,\"He said \"\"hi\"\"\",Food,20.00\n\
         01/15/2024,\"Weekly run\",Food,50.00"
    );
}

#[test]
fn export_json_uses_persisted_shape() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    export(&conn, &["--format", "JSON", "--search", "cinema", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["description"], "Cinema");
    assert_eq!(arr[0]["category"], "Entertainment");
    assert_eq!(arr[0]["date"], "2024-02-03");
    assert_eq!(arr[0]["amount"], serde_json::json!(9.99));
    assert!(arr[0]["createdAt"].is_string());
    assert!(arr[0]["id"].is_string());
}

#[test]
fn export_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(export(&conn, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}

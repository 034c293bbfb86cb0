// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn filter_args() -> Vec<Arg> {
    vec![
        Arg::new("category")
            .long("category")
            .help("Category name, or All"),
        Arg::new("from")
            .long("from")
            .help("Earliest date, inclusive (YYYY-MM-DD)"),
        Arg::new("to")
            .long("to")
            .help("Latest date, inclusive (YYYY-MM-DD)"),
        Arg::new("search")
            .long("search")
            .help("Case-insensitive text matched against description, category and amount"),
    ]
}

fn output_flags() -> Vec<Arg> {
    vec![
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
        Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue),
    ]
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .about("Personal expense tracking: record, filter, summarize and export")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("SPENDLOG_DB")
                .value_parser(value_parser!(PathBuf))
                .help("Database file (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (repeatable)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(Arg::new("description").long("description").short('d').required(true))
                .arg(Arg::new("category").long("category").short('c').required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD (defaults to today)"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Replace fields of an existing expense")
                .arg(Arg::new("id").long("id").required(true))
                .arg(Arg::new("amount").long("amount").allow_hyphen_values(true))
                .arg(Arg::new("description").long("description").short('d'))
                .arg(Arg::new("category").long("category").short('c'))
                .arg(Arg::new("date").long("date")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an expense")
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(
            Command::new("list")
                .about("List expenses, optionally filtered")
                .args(filter_args())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .args(output_flags()),
        )
        .subcommand(
            Command::new("summary")
                .about("Totals, category breakdown and six-month trend")
                .args(output_flags()),
        )
        .subcommand(
            Command::new("export")
                .about("Write expenses to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path (defaults to expenses-<today>.csv)"),
                )
                .args(filter_args()),
        )
        .subcommand(
            Command::new("import")
                .about("Add expenses from a CSV file in the export layout")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete every stored expense")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm deletion"),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored expenses for problems"))
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").long("key").required(true))
                        .arg(Arg::new("value").long("value").required(true)),
                ),
        )
}

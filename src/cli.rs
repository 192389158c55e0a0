// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("expense-tracker")
        .version(clap::crate_version!())
        .about("Record expenses, check them against a budget, keep them in a CSV file")
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_name("PATH")
                .help("Expense file (default: data/expenses.csv, env EXPENSE_TRACKER_FILE)"),
        )
        .arg(
            Arg::new("budget")
                .long("budget")
                .global(true)
                .value_name("AMOUNT")
                .help("Budget held by the session (default: 50000, env EXPENSE_TRACKER_BUDGET)"),
        )
        .subcommand(Command::new("init").about("Create the data directory and an empty expense file"))
        .subcommand(
            Command::new("add")
                .about("Add an expense; missing or invalid values are asked for")
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(json_flags(
            Command::new("view").about("Show valid and invalid expense records"),
        ))
        .subcommand(
            Command::new("budget")
                .about("Compare total spending against a budget ceiling")
                .arg(
                    Arg::new("ceiling")
                        .long("ceiling")
                        .value_name("AMOUNT")
                        .help("Ceiling for this check; asked for when omitted"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                ),
        )
        .subcommand(Command::new("menu").about("Interactive menu (the default)"))
}

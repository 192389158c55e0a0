// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{budget, expenses, storage};
use crate::console::Console;
use crate::tracker::Tracker;
use crate::utils::fmt_money;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

const WIDTH: usize = 40;

enum Flow {
    Continue,
    /// Menu option 5: always writes the file.
    Quit,
    /// Declined to continue, or input ended.
    Leave,
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out, "{:^width$}", "Personal Expense Tracker", width = WIDTH)?;
    writeln!(out, "{}", "=".repeat(WIDTH))
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(WIDTH))?;
    writeln!(out, "{:^width$}", "Select from the options below", width = WIDTH)?;
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    for (n, label) in [
        "Add Expense",
        "View Expenses",
        "Track Budget",
        "Save Expenses",
        "Exit",
    ]
    .iter()
    .enumerate()
    {
        writeln!(out, "{:<5}{}", format!("{}.", n + 1), label)?;
    }
    writeln!(out, "{}", "-".repeat(WIDTH))
}

fn print_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "*".repeat(50))?;
    writeln!(out, "Thank you for using the Expense Tracker!")?;
    writeln!(out, "{}", "*".repeat(50))
}

fn step<R: BufRead, W: Write>(
    tracker: &mut Tracker,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> io::Result<Flow> {
    print_menu(console.out())?;
    let choice = console.ask("Enter your choice from the menu [1-5]: ")?;
    match choice.trim() {
        "1" => expenses::add(tracker, console, &expenses::ExpenseInput::default(), today)?,
        "2" => expenses::render_view(console.out(), tracker.ledger())?,
        "3" => budget::track(tracker, console)?,
        "4" => {
            storage::save_and_report(tracker, console.out())?;
        }
        "5" => return Ok(Flow::Quit),
        _ => writeln!(
            console.out(),
            "Invalid choice. Please select a number between 1 and 5."
        )?,
    }
    if console.confirm_continue()? {
        Ok(Flow::Continue)
    } else {
        Ok(Flow::Leave)
    }
}

fn finish<R: BufRead, W: Write>(
    tracker: &mut Tracker,
    console: &mut Console<R, W>,
    flow: Flow,
) -> io::Result<()> {
    if matches!(flow, Flow::Quit) || tracker.has_unsaved_changes() {
        storage::save_and_report(tracker, console.out())?;
    }
    print_goodbye(console.out())
}

/// Runs the interactive loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    tracker: &mut Tracker,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> io::Result<()> {
    let msg = storage::load_message(tracker.load_status(), tracker.data_file());
    writeln!(console.out(), "{}", msg)?;
    writeln!(console.out(), "Budget on record: {}", fmt_money(tracker.budget()))?;
    print_banner(console.out())?;
    let flow = loop {
        match step(tracker, console, today) {
            Ok(Flow::Continue) => continue,
            Ok(flow) => break flow,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!("input closed, leaving menu");
                writeln!(console.out())?;
                break Flow::Leave;
            }
            Err(e) => return Err(e),
        }
    };
    finish(tracker, console, flow)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::console::Console;
use crate::error::ValidationError;
use crate::ledger::check_budget;
use crate::models::BudgetStatus;
use crate::tracker::Tracker;
use crate::utils::{coerce_amount, fmt_money, maybe_write_json, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

fn parse_ceiling(s: &str) -> Result<Decimal, ValidationError> {
    coerce_amount(s).ok_or_else(|| ValidationError::InvalidAmount(s.trim().to_string()))
}

/// The ceiling is asked for on every check; the session budget is not reused.
pub fn prompt_ceiling<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Decimal> {
    console.ask_until("Please enter your monthly budget amount: ", parse_ceiling)
}

pub fn render<W: Write>(out: &mut W, status: &BudgetStatus) -> io::Result<()> {
    let verdict = if status.over_budget {
        format!("⚠️  Over budget by {}", fmt_money(status.remaining.abs()))
    } else {
        format!("✅ {} remaining", fmt_money(status.remaining))
    };
    let rows = vec![
        vec!["Total spent so far".into(), fmt_money(status.total_spent)],
        vec!["Monthly budget".into(), fmt_money(status.ceiling)],
        vec!["Remaining budget".into(), fmt_money(status.remaining)],
        vec!["Status".into(), verdict],
    ];
    writeln!(out, "{}", pretty_table(&["Budget", "Value"], rows))
}

/// Menu flavour: a malformed stored amount is reported and the session goes on.
pub fn track<R: BufRead, W: Write>(tracker: &Tracker, console: &mut Console<R, W>) -> io::Result<()> {
    let ceiling = prompt_ceiling(console)?;
    match check_budget(tracker.ledger().records(), ceiling) {
        Ok(status) => {
            tracing::debug!(total = %status.total_spent, %ceiling, over = status.over_budget, "budget checked");
            render(console.out(), &status)
        }
        Err(e) => {
            tracing::warn!(error = %e, "budget check aborted");
            console.warn(format!("Cannot total expenses: {}", e))
        }
    }
}

pub fn handle<R: BufRead, W: Write>(
    tracker: &Tracker,
    m: &clap::ArgMatches,
    console: &mut Console<R, W>,
) -> Result<()> {
    let ceiling = match m.get_one::<String>("ceiling") {
        Some(s) => parse_ceiling(s)?,
        None => prompt_ceiling(console)?,
    };
    let status = check_budget(tracker.ledger().records(), ceiling)
        .context("Cannot total expenses")?;
    if !maybe_write_json(console.out(), m.get_flag("json"), false, &status)? {
        render(console.out(), &status)?;
    }
    Ok(())
}

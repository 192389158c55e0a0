// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::console::Console;
use crate::error::ValidationError;
use crate::ledger::{ExpenseLedger, total_spent};
use crate::models::{ExpenseRecord, NewExpense};
use crate::tracker::Tracker;
use crate::utils::{
    fmt_amount, fmt_money, maybe_write_json, parse_amount, parse_expense_date, pretty_table,
    require_text,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Values supplied up front, e.g. from flags. Anything missing or rejected is
/// asked for on the console.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl ExpenseInput {
    pub fn from_matches(m: &clap::ArgMatches) -> Self {
        let get = |k: &str| m.get_one::<String>(k).cloned();
        Self {
            date: get("date"),
            category: get("category"),
            amount: get("amount"),
            description: get("description"),
        }
    }
}

fn field<T, R, W, F>(
    console: &mut Console<R, W>,
    preset: Option<&str>,
    prompt: &str,
    mut parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T, ValidationError>,
{
    if let Some(v) = preset {
        match parse(v) {
            Ok(t) => return Ok(t),
            Err(e) => console.warn(e)?,
        }
    }
    console.ask_until(prompt, parse)
}

/// Collects one expense, re-asking each field until it validates. Nothing is
/// stored here; the caller appends the result.
pub fn prompt_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: &ExpenseInput,
    today: NaiveDate,
) -> io::Result<NewExpense> {
    let date = field(console, preset.date.as_deref(), "Enter the date (YYYY-MM-DD): ", |s| {
        parse_expense_date(s, today)
    })?;
    let category = field(console, preset.category.as_deref(), "Enter the category: ", |s| {
        require_text("category", s)
    })?;
    let amount = field(console, preset.amount.as_deref(), "Enter the amount: ", parse_amount)?;
    let description = field(
        console,
        preset.description.as_deref(),
        "Enter the description: ",
        |s| require_text("description", s),
    )?;
    Ok(NewExpense {
        date,
        category,
        amount,
        description,
    })
}

pub fn add<R: BufRead, W: Write>(
    tracker: &mut Tracker,
    console: &mut Console<R, W>,
    preset: &ExpenseInput,
    today: NaiveDate,
) -> io::Result<()> {
    let expense = prompt_expense(console, preset, today)?;
    let rec = tracker.add(expense);
    let line = format!(
        "Date: {} | Category: {} | Amount: {} | Description: {}",
        rec.date, rec.category, rec.amount, rec.description
    );
    let out = console.out();
    writeln!(out, "{}", line)?;
    writeln!(out, "✅ Expense added successfully!")
}

pub fn handle_add<R: BufRead, W: Write>(
    tracker: &mut Tracker,
    m: &clap::ArgMatches,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<()> {
    add(tracker, console, &ExpenseInput::from_matches(m), today)?;
    tracker
        .save()
        .with_context(|| format!("Save expenses to {}", tracker.data_file().display()))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRow {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub valid: bool,
}

pub fn query_rows(ledger: &ExpenseLedger) -> Vec<ExpenseRow> {
    ledger
        .records()
        .iter()
        .map(|r| ExpenseRow {
            date: r.date.clone(),
            category: r.category.clone(),
            amount: r.amount.clone(),
            description: r.description.clone(),
            valid: r.is_complete(),
        })
        .collect()
}

fn write_group<W: Write>(out: &mut W, title: &str, records: &[&ExpenseRecord]) -> io::Result<()> {
    writeln!(out, "\n{}", title)?;
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.category.clone(),
                fmt_amount(&r.amount),
                r.description.clone(),
            ]
        })
        .collect();
    writeln!(
        out,
        "{}",
        pretty_table(&["Date", "Category", "Amount", "Description"], rows)
    )?;
    match total_spent(records.iter().copied()) {
        Ok(t) => writeln!(out, "Total Expenses Recorded: {}", fmt_money(t)),
        Err(e) => writeln!(out, "Total Expenses Recorded: unavailable ({})", e),
    }
}

pub fn render_view<W: Write>(out: &mut W, ledger: &ExpenseLedger) -> io::Result<()> {
    if ledger.is_empty() {
        return writeln!(out, "No expenses recorded yet.");
    }
    let (valid, invalid) = ledger.partition_by_validity();
    if !valid.is_empty() {
        write_group(out, "✅ Valid Expense Records", &valid)?;
    }
    if !invalid.is_empty() {
        write_group(out, "⚠️  Invalid Expense Records", &invalid)?;
    }
    Ok(())
}

pub fn handle_view<W: Write>(tracker: &Tracker, m: &clap::ArgMatches, out: &mut W) -> Result<()> {
    let rows = query_rows(tracker.ledger());
    if !maybe_write_json(out, m.get_flag("json"), m.get_flag("jsonl"), &rows)? {
        render_view(out, tracker.ledger())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_retries_until_date_is_valid() {
        let mut c = console("2999-01-01\n28/06/2025\n2025-06-28\nFood\nabc\n-5\n250\nDinner\n");
        let e = prompt_expense(&mut c, &ExpenseInput::default(), today()).unwrap();
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2025, 6, 28).unwrap());
        assert_eq!(e.amount, rust_decimal::Decimal::new(250, 0));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("in the future"));
        assert!(out.contains("expected YYYY-MM-DD"));
        assert!(out.contains("must not be negative"));
    }

    #[test]
    fn valid_presets_need_no_input() {
        let preset = ExpenseInput {
            date: Some("2025-06-01".into()),
            category: Some("Travel".into()),
            amount: Some("12.5".into()),
            description: Some("Bus".into()),
        };
        let mut c = console("");
        let e = prompt_expense(&mut c, &preset, today()).unwrap();
        assert_eq!(e.category, "Travel");
    }

    #[test]
    fn rejected_preset_falls_back_to_prompt() {
        let preset = ExpenseInput {
            amount: Some("free".into()),
            ..ExpenseInput::default()
        };
        let mut c = console("2025-06-01\nFood\n3\nTea\n");
        let e = prompt_expense(&mut c, &preset, today()).unwrap();
        assert_eq!(e.amount, rust_decimal::Decimal::new(3, 0));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Invalid amount 'free'"));
    }

    #[test]
    fn view_reports_unavailable_total_for_bad_amounts() {
        let ledger = ExpenseLedger::from_records(vec![
            ExpenseRecord {
                date: "2024-01-01".into(),
                category: "Food".into(),
                amount: "100".into(),
                description: "Lunch".into(),
            },
            ExpenseRecord {
                date: "2024-01-02".into(),
                category: "Misc".into(),
                amount: String::new(),
                description: "Lost receipt".into(),
            },
        ]);
        let mut out = Vec::new();
        render_view(&mut out, &ledger).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Valid Expense Records"));
        assert!(out.contains("Invalid Expense Records"));
        assert!(out.contains("Total Expenses Recorded: 100.00"));
        assert!(out.contains("Total Expenses Recorded: unavailable"));
    }

    #[test]
    fn empty_view() {
        let mut out = Vec::new();
        render_view(&mut out, &ExpenseLedger::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No expenses recorded yet.\n");
    }
}

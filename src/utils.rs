// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber. Logs go to stderr so they never interleave
/// with menu output; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_tracker=warn"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `YYYY-MM-DD` date that must not lie after `today`.
pub fn parse_expense_date(s: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let s = s.trim();
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))?;
    if date > today {
        return Err(ValidationError::FutureDate(date));
    }
    Ok(date)
}

/// Reads a stored or typed amount. Accepts plain and scientific notation.
///
/// Exponents past the 28-digit scale go through `f64`: magnitudes below
/// 1e-28 read as zero, magnitudes above `Decimal::MAX` are rejected.
pub fn coerce_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if let Ok(d) = s.parse::<Decimal>() {
        return Some(d);
    }
    if let Ok(d) = Decimal::from_scientific(s) {
        return Some(d);
    }
    let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if f.abs() < 1e-28 {
        return Some(Decimal::ZERO);
    }
    Decimal::from_f64(f)
}

pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let d = coerce_amount(s).ok_or_else(|| ValidationError::InvalidAmount(s.trim().to_string()))?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(ValidationError::NegativeAmount(d));
    }
    Ok(d)
}

pub fn require_text(field: &'static str, s: &str) -> Result<String, ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(s.to_string())
}

/// Rounds to cents, halves away from zero.
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_money(d: Decimal) -> String {
    format!("{:.2}", round_money(d))
}

/// Two-decimal rendering when the text is numeric, the raw text otherwise.
pub fn fmt_amount(raw: &str) -> String {
    match coerce_amount(raw) {
        Some(d) => fmt_money(d),
        None => raw.to_string(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_write_json<W: Write, T: serde::Serialize>(
    out: &mut W,
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line.
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                writeln!(out, "{}", serde_json::to_string(item)?)?;
            }
        } else {
            writeln!(out, "{}", serde_json::to_string(&val)?)?;
        }
        return Ok(true);
    }
    Ok(false)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::codec::{self, LoadStatus};
use crate::config::Settings;
use crate::tracker::Tracker;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

pub fn init<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let path = &settings.data_file;
    let created =
        codec::ensure_file(path).with_context(|| format!("Initialize {}", path.display()))?;
    if created {
        writeln!(out, "Expense file initialized at {}", path.display())?;
    } else {
        writeln!(out, "Expense file already exists at {}", path.display())?;
    }
    Ok(())
}

pub fn load_message(status: LoadStatus, path: &Path) -> String {
    match status {
        LoadStatus::Loaded(n) => {
            format!("💾 Loaded {} expense(s) from {}", n, path.display())
        }
        LoadStatus::Empty => format!("No expenses found in the file {}.", path.display()),
        LoadStatus::NotFound => format!("No previous data found at {}.", path.display()),
    }
}

/// Saves and reports the outcome. A failed save is reported, not returned:
/// the ledger stays in memory and the session carries on.
pub fn save_and_report<W: Write>(tracker: &mut Tracker, out: &mut W) -> io::Result<bool> {
    match tracker.save() {
        Ok(()) => {
            writeln!(
                out,
                "💾 Saved {} expense(s) to {}",
                tracker.ledger().len(),
                tracker.data_file().display()
            )?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(error = %e, "save failed");
            writeln!(out, "❌ Could not save expenses: {}", e)?;
            Ok(false)
        }
    }
}

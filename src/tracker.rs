// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::codec::{self, LoadStatus};
use crate::config::Settings;
use crate::error::CodecError;
use crate::ledger::ExpenseLedger;
use crate::models::{ExpenseRecord, NewExpense};
use rust_decimal::Decimal;
use std::path::Path;

/// One tracking session: the ledger, where it lives on disk, and the budget
/// given at start-up.
#[derive(Debug)]
pub struct Tracker {
    settings: Settings,
    ledger: ExpenseLedger,
    load_status: LoadStatus,
    dirty: bool,
}

impl Tracker {
    /// Loads the configured file. A missing file starts an empty ledger.
    pub fn open(settings: Settings) -> Result<Self, CodecError> {
        let loaded = codec::load(&settings.data_file)?;
        tracing::debug!(budget = %settings.budget, status = ?loaded.status, "session opened");
        Ok(Self {
            settings,
            ledger: ExpenseLedger::from_records(loaded.records),
            load_status: loaded.status,
            dirty: false,
        })
    }

    pub fn data_file(&self) -> &Path {
        &self.settings.data_file
    }

    pub fn budget(&self) -> Decimal {
        self.settings.budget
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn add(&mut self, expense: NewExpense) -> &ExpenseRecord {
        self.dirty = true;
        self.ledger.add_record(expense)
    }

    /// On failure the ledger is left untouched and still marked unsaved.
    pub fn save(&mut self) -> Result<(), CodecError> {
        codec::save(&self.settings.data_file, self.ledger.records())?;
        self.dirty = false;
        Ok(())
    }
}

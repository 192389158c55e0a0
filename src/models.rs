// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use crate::utils::{fmt_money, parse_amount, parse_expense_date, require_text};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One expense as it is stored: every field is kept as text so a record read
/// back from disk carries exactly what the file contained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseRecord {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseRecord {
    /// Presence check only; values are not re-parsed.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.is_empty())
    }

    pub fn fields(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.category.as_str(),
            self.amount.as_str(),
            self.description.as_str(),
        ]
    }
}

impl From<NewExpense> for ExpenseRecord {
    fn from(e: NewExpense) -> Self {
        Self {
            date: e.date.to_string(),
            category: e.category,
            amount: fmt_money(e.amount),
            description: e.description,
        }
    }
}

/// A fully validated expense, ready to be appended to a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
}

impl NewExpense {
    pub fn parse(
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            date: parse_expense_date(date, today)?,
            category: require_text("category", category)?,
            amount: parse_amount(amount)?,
            description: require_text("description", description)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub total_spent: Decimal,
    pub ceiling: Decimal,
    pub remaining: Decimal,
    pub over_budget: bool,
}

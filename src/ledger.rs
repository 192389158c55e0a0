// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{NumericFormatError, TotalError};
use crate::models::{BudgetStatus, ExpenseRecord, NewExpense};
use crate::utils::coerce_amount;
use rust_decimal::Decimal;

/// Append-only, ordered list of expenses for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn add_record(&mut self, expense: NewExpense) -> &ExpenseRecord {
        let rec = ExpenseRecord::from(expense);
        tracing::debug!(date = %rec.date, category = %rec.category, amount = %rec.amount, "expense appended");
        let at = self.records.len();
        self.records.push(rec);
        &self.records[at]
    }

    /// Splits into (complete, incomplete) records, order preserved on both sides.
    pub fn partition_by_validity(&self) -> (Vec<&ExpenseRecord>, Vec<&ExpenseRecord>) {
        self.records.iter().partition(|r| r.is_complete())
    }
}

pub fn total_spent<'a, I>(records: I) -> Result<Decimal, TotalError>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut total = Decimal::ZERO;
    for r in records {
        let amt = coerce_amount(&r.amount).ok_or_else(|| NumericFormatError {
            date: r.date.clone(),
            amount: r.amount.clone(),
        })?;
        total = total.checked_add(amt).ok_or(TotalError::Overflow)?;
    }
    Ok(total)
}

/// Compares spending against a ceiling supplied by the caller for this check only.
pub fn check_budget<'a, I>(records: I, ceiling: Decimal) -> Result<BudgetStatus, TotalError>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let total_spent = total_spent(records)?;
    let remaining = ceiling
        .checked_sub(total_spent)
        .ok_or(TotalError::Overflow)?;
    Ok(BudgetStatus {
        total_spent,
        ceiling,
        remaining,
        over_budget: remaining < Decimal::ZERO,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(date: &str, category: &str, amount: &str, description: &str) -> ExpenseRecord {
        ExpenseRecord {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    fn scenario() -> ExpenseLedger {
        ExpenseLedger::from_records(vec![
            rec("2024-01-01", "Food", "100.00", "Lunch"),
            rec("2024-01-02", "", "50.00", "Taxi"),
        ])
    }

    #[test]
    fn partition_scenario() {
        let ledger = scenario();
        let (valid, invalid) = ledger.partition_by_validity();
        assert_eq!(valid, vec![&ledger.records()[0]]);
        assert_eq!(invalid, vec![&ledger.records()[1]]);
        assert_eq!(total_spent(ledger.records()).unwrap(), Decimal::new(15000, 2));
    }

    #[test]
    fn partition_keeps_relative_order() {
        let ledger = ExpenseLedger::from_records(vec![
            rec("2024-01-01", "A", "1", "a"),
            rec("", "B", "2", "b"),
            rec("2024-01-03", "C", "3", "c"),
            rec("2024-01-04", "D", "", "d"),
        ]);
        let (valid, invalid) = ledger.partition_by_validity();
        let cats = |v: &[&ExpenseRecord]| v.iter().map(|r| r.category.clone()).collect::<Vec<_>>();
        assert_eq!(cats(&valid), ["A", "C"]);
        assert_eq!(cats(&invalid), ["B", "D"]);
    }

    #[test]
    fn add_record_appends_valid_entry() {
        let mut ledger = scenario();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let e = NewExpense::parse("2024-01-01", "Rent", "900", "January", today).unwrap();
        let stored = ledger.add_record(e).clone();
        assert_eq!(stored.amount, "900.00");
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.records().last(), Some(&stored));
        let (valid, invalid) = ledger.partition_by_validity();
        assert_eq!(valid.len(), 2);
        assert_eq!(invalid.len(), 1);
    }

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(total_spent(std::iter::empty::<&ExpenseRecord>()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn total_is_additive() {
        let a = vec![rec("d", "c", "10.25", "x"), rec("d", "c", "4", "x")];
        let b = vec![rec("d", "c", "0.75", "x")];
        let joined: Vec<_> = a.iter().chain(b.iter()).cloned().collect();
        assert_eq!(
            total_spent(&joined).unwrap(),
            total_spent(&a).unwrap() + total_spent(&b).unwrap()
        );
    }

    #[test]
    fn non_numeric_amount_fails_total() {
        let records = vec![rec("2024-01-01", "Food", "ten", "Lunch")];
        let err = total_spent(&records).unwrap_err();
        assert_eq!(
            err,
            TotalError::NumericFormat(NumericFormatError {
                date: "2024-01-01".into(),
                amount: "ten".into(),
            })
        );
    }

    #[test]
    fn total_beyond_decimal_range_is_an_error() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut ledger = ExpenseLedger::new();
        for day in ["2024-01-01", "2024-01-02"] {
            let e = NewExpense::parse(day, "Big", "50000000000000000000000000000", "x", today)
                .unwrap();
            ledger.add_record(e);
        }
        assert_eq!(total_spent(ledger.records()), Err(TotalError::Overflow));
        assert_eq!(
            check_budget(ledger.records(), Decimal::new(100, 0)),
            Err(TotalError::Overflow)
        );
    }

    #[test]
    fn remaining_beyond_decimal_range_is_an_error() {
        let records = vec![rec("2024-01-01", "Food", "1", "Tea")];
        assert_eq!(check_budget(&records, Decimal::MIN), Err(TotalError::Overflow));
        assert!(check_budget(&records, Decimal::MAX).is_ok());
    }

    #[test]
    fn budget_boundary_is_not_over() {
        let ledger = scenario();
        let status = check_budget(ledger.records(), Decimal::new(150, 0)).unwrap();
        assert!(!status.over_budget);
        assert_eq!(status.remaining, Decimal::ZERO);
    }

    #[test]
    fn budget_over_when_ceiling_below_total() {
        let ledger = scenario();
        let status = check_budget(ledger.records(), Decimal::new(14999, 2)).unwrap();
        assert!(status.over_budget);
        assert_eq!(status.remaining, Decimal::new(-1, 2));
        assert_eq!(status.total_spent, Decimal::new(150, 0));
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected input while creating a record. Callers re-prompt on these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("The date {0} is in the future")]
    FutureDate(NaiveDate),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("The {0} must not be empty")]
    Blank(&'static str),
}

/// A stored amount that cannot be read as a number during aggregation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid amount '{amount}' in expense dated '{date}'")]
pub struct NumericFormatError {
    pub date: String,
    pub amount: String,
}

/// Why stored amounts could not be added up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalError {
    #[error(transparent)]
    NumericFormat(#[from] NumericFormatError),
    #[error("Total of expenses is out of range")]
    Overflow,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

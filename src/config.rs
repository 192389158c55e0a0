// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::coerce_amount;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::path::PathBuf;

pub const FILE_ENV: &str = "EXPENSE_TRACKER_FILE";
pub const BUDGET_ENV: &str = "EXPENSE_TRACKER_BUDGET";

static DEFAULT_DATA_FILE: Lazy<PathBuf> = Lazy::new(|| ["data", "expenses.csv"].iter().collect());

pub const DEFAULT_BUDGET: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

/// Session settings. Precedence: command-line flag, environment, default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    /// Budget held by the session from start-up. Budget checks take their own
    /// ceiling and do not read this value.
    pub budget: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.clone(),
            budget: DEFAULT_BUDGET,
        }
    }
}

impl Settings {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        Self::resolve(
            m.get_one::<String>("file").map(String::as_str),
            m.get_one::<String>("budget").map(String::as_str),
            |key| std::env::var(key).ok(),
        )
    }

    /// `env` looks up a variable by name; injected so resolution can be tested
    /// without touching the process environment.
    pub fn resolve<F>(file_flag: Option<&str>, budget_flag: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(f) = file_flag.map(str::to_string).or_else(|| env(FILE_ENV)) {
            let f = f.trim();
            if !f.is_empty() {
                settings.data_file = PathBuf::from(f);
            }
        }
        if let Some(b) = budget_flag.map(str::to_string).or_else(|| env(BUDGET_ENV)) {
            settings.budget =
                coerce_amount(&b).with_context(|| format!("Invalid budget '{}'", b.trim()))?;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let s = Settings::resolve(None, None, |_| None).unwrap();
        assert_eq!(s.data_file, PathBuf::from("data").join("expenses.csv"));
        assert_eq!(s.budget, Decimal::new(50000, 0));
    }

    #[test]
    fn flag_beats_environment() {
        let env: HashMap<&str, &str> =
            HashMap::from([(FILE_ENV, "env.csv"), (BUDGET_ENV, "100")]);
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());
        let s = Settings::resolve(Some("flag.csv"), None, lookup).unwrap();
        assert_eq!(s.data_file, PathBuf::from("flag.csv"));
        assert_eq!(s.budget, Decimal::new(100, 0));
    }

    #[test]
    fn bad_budget_is_an_error() {
        assert!(Settings::resolve(None, Some("lots"), |_| None).is_err());
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV persistence for expense records.
//!
//! The file is a header row `date,category,amount,description` followed by one
//! row per record. Values are read back as raw text; nothing is parsed here.

use crate::error::CodecError;
use crate::models::ExpenseRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::Path;

pub const HEADER: [&str; 4] = ["date", "category", "amount", "description"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    /// The file exists but holds no data rows.
    Empty,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub records: Vec<ExpenseRecord>,
    pub status: LoadStatus,
}

pub fn write_records<'a, W, I>(writer: W, records: I) -> Result<(), csv::Error>
where
    W: io::Write,
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for r in records {
        wtr.write_record(r.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Rows shorter than the header leave the missing fields empty. Bytes that are
/// not UTF-8 are replaced with U+FFFD rather than failing the load.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<ExpenseRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = StringRecord::from_byte_record_lossy(rdr.byte_headers()?.clone());
    let mut out = Vec::new();
    for row in rdr.byte_records() {
        let row = StringRecord::from_byte_record_lossy(row?);
        out.push(row.deserialize::<ExpenseRecord>(Some(&headers))?);
    }
    Ok(out)
}

/// Truncates `path` and writes every record. The parent directory must exist.
pub fn save<'a, I>(path: &Path, records: I) -> Result<(), CodecError>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let file = File::create(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(file, records).map_err(|source| CodecError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "expenses saved");
    Ok(())
}

pub fn load(path: &Path) -> Result<Loaded, CodecError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no expense file yet");
            return Ok(Loaded {
                records: Vec::new(),
                status: LoadStatus::NotFound,
            });
        }
        Err(source) => {
            return Err(CodecError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let records = read_records(file).map_err(|source| CodecError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let status = if records.is_empty() {
        LoadStatus::Empty
    } else {
        LoadStatus::Loaded(records.len())
    };
    tracing::info!(path = %path.display(), count = records.len(), "expenses loaded");
    Ok(Loaded { records, status })
}

/// Creates the parent directory and a header-only file unless one exists.
/// Returns whether a file was created.
pub fn ensure_file(path: &Path) -> Result<bool, CodecError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| CodecError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    save(path, std::iter::empty::<&ExpenseRecord>())?;
    Ok(true)
}

// src/input.rs
//! CSV loading for the person, alias and email tables.
//!
//! Only the columns the pipeline needs are read. Headers are matched by name,
//! so extra columns (message bodies, dates) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::config::InputConfig;
use crate::error::{MailRankError, Result};
use crate::identity::{AliasTable, PersonId, PersonTable};

/// A raw (from, to) pair as it appears in the email table.
pub type RawRecord = (String, String);

/// Stand-in for a missing from/to cell in a row that is otherwise populated.
pub const MISSING_CELL: &str = "nan";

/// Everything the pipeline needs from disk.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub persons: PersonTable,
    pub aliases: AliasTable,
    pub records: Vec<RawRecord>,
    /// Rows discarded because every cell was empty.
    pub dropped_rows: usize,
}

/// Loads all three tables named by `input`.
///
/// # Errors
/// Returns error if a file cannot be opened, is not valid CSV, or lacks a
/// required column.
pub fn load_dataset(input: &InputConfig) -> Result<Dataset> {
    let persons = load_persons(&input.persons)?;
    let aliases = load_aliases(&input.aliases)?;
    let (records, dropped_rows) = load_records(&input.emails, &input.from_column, &input.to_column)?;

    tracing::info!(
        persons = persons.len(),
        aliases = aliases.len(),
        records = records.len(),
        dropped_rows,
        "loaded dataset"
    );

    Ok(Dataset {
        persons,
        aliases,
        records,
        dropped_rows,
    })
}

/// # Errors
/// Returns error on unreadable file, malformed CSV, or missing `Id`/`Name` column.
pub fn load_persons(path: &Path) -> Result<PersonTable> {
    read_persons(open(path)?).map_err(|e| e.at(path))
}

/// # Errors
/// Returns error on unreadable file, malformed CSV, or missing `Alias`/`PersonId` column.
pub fn load_aliases(path: &Path) -> Result<AliasTable> {
    read_aliases(open(path)?).map_err(|e| e.at(path))
}

/// Loads (from, to) pairs and the number of blank rows dropped.
///
/// # Errors
/// Returns error on unreadable file, malformed CSV, or missing metadata column.
pub fn load_records(path: &Path, from_column: &str, to_column: &str) -> Result<(Vec<RawRecord>, usize)> {
    read_records(open(path)?, from_column, to_column).map_err(|e| e.at(path))
}

/// # Errors
/// Returns error on malformed CSV or missing `Id`/`Name` column.
pub fn read_persons<R: Read>(reader: R) -> Result<PersonTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();
    let id_col = column(&headers, "Id")?;
    let name_col = column(&headers, "Name")?;

    let mut persons = PersonTable::new();
    for row in rdr.records() {
        let row = row.map_err(csv_err)?;
        let Some(id) = parse_id(&row, id_col) else {
            tracing::warn!(row = ?row.position().map(csv::Position::line), "skipping person with malformed id");
            continue;
        };
        persons.insert(id, cell(&row, name_col));
    }
    Ok(persons)
}

/// # Errors
/// Returns error on malformed CSV or missing `Alias`/`PersonId` column.
pub fn read_aliases<R: Read>(reader: R) -> Result<AliasTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();
    let alias_col = column(&headers, "Alias")?;
    let person_col = column(&headers, "PersonId")?;

    let mut aliases = AliasTable::new();
    for row in rdr.records() {
        let row = row.map_err(csv_err)?;
        let Some(person) = parse_id(&row, person_col) else {
            tracing::warn!(row = ?row.position().map(csv::Position::line), "skipping alias with malformed person id");
            continue;
        };
        aliases.insert(&cell(&row, alias_col), person);
    }
    Ok(aliases)
}

/// Reads (from, to) pairs.
///
/// Only rows with every cell empty are dropped. A row that carries anything
/// (an id, a body) is kept, and an empty from/to cell becomes [`MISSING_CELL`].
///
/// # Errors
/// Returns error on malformed CSV or missing metadata column.
pub fn read_records<R: Read>(
    reader: R,
    from_column: &str,
    to_column: &str,
) -> Result<(Vec<RawRecord>, usize)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();
    let from_col = column(&headers, from_column)?;
    let to_col = column(&headers, to_column)?;

    let mut records = Vec::new();
    let mut dropped = 0;
    for row in rdr.records() {
        let row = row.map_err(csv_err)?;
        if row.iter().all(str::is_empty) {
            dropped += 1;
            continue;
        }
        records.push((metadata_cell(&row, from_col), metadata_cell(&row, to_col)));
    }
    if dropped > 0 {
        tracing::debug!(dropped, "dropped blank rows");
    }
    Ok((records, dropped))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| MailRankError::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| MailRankError::MissingColumn {
            column: name.to_string(),
            path: "<reader>".into(),
        })
}

fn cell(row: &StringRecord, idx: usize) -> String {
    row.get(idx).unwrap_or_default().to_string()
}

fn metadata_cell(row: &StringRecord, idx: usize) -> String {
    match row.get(idx) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => MISSING_CELL.to_string(),
    }
}

fn parse_id(row: &StringRecord, idx: usize) -> Option<PersonId> {
    row.get(idx)?.trim().parse().ok()
}

fn csv_err(source: csv::Error) -> MailRankError {
    MailRankError::Csv {
        source,
        path: "<reader>".into(),
    }
}

impl MailRankError {
    /// Attaches a file path to errors raised while reading from a bare reader.
    fn at(self, path: &Path) -> Self {
        match self {
            MailRankError::Csv { source, .. } => MailRankError::Csv {
                source,
                path: path.to_path_buf(),
            },
            MailRankError::MissingColumn { column, .. } => MailRankError::MissingColumn {
                column,
                path: path.to_path_buf(),
            },
            other => other,
        }
    }
}

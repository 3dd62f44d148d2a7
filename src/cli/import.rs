use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::info;

use crate::batch::{bulk_upsert, partition, report};
use crate::cli::display::print_batch_result;
use crate::db::Database;
use crate::error::CsvError;
use crate::models::BatchEntry;

/// A row from a CSV import file.
///
/// Headers must be `first_name`, `last_name`, `phone` (case-sensitive).
/// An empty `last_name` means the contact has none.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRow {
    pub first_name: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub last_name: Option<String>,

    pub phone: String,
}

impl From<ImportRow> for BatchEntry {
    fn from(row: ImportRow) -> Self {
        // Phones are validated exactly as written
        BatchEntry::new(row.first_name.trim(), row.phone)
            .with_last_name(row.last_name.map(|s| s.trim().to_string()))
    }
}

/// Deserialize empty strings as None.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Read every row. Any unparsable row fails the whole file.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<BatchEntry>, CsvError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for result in csv_reader.deserialize::<ImportRow>() {
        let row = result.map_err(|source| CsvError::Row {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        entries.push(row.into());
    }

    Ok(entries)
}

/// Execute the import command.
pub fn run_import(db: &Database, file: &str, dry_run: bool) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(CsvError::NotFound(file.to_string()).into());
    }

    let reader = File::open(path)?;
    let entries = read_entries(reader)?;
    info!(file, rows = entries.len(), dry_run, "read csv");

    if dry_run {
        let (valid, invalid) = partition(entries);
        println!("Dry run: {}", file);
        print_batch_result(&report(invalid, valid.len()));
        return Ok(());
    }

    let result = bulk_upsert(db, entries)?;
    print_batch_result(&result);
    Ok(())
}

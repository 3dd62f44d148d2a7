//! Bulk upsert pipeline: partition entries by validity, upsert the valid ones
//! in one transaction, and report what was accepted and rejected.

use tracing::info;

use crate::db::Database;
use crate::error::StorageError;
use crate::models::{BatchEntry, BatchResult};

/// Split entries into (valid, invalid), keeping input order within each side.
///
/// Every entry ends up in exactly one of the two outputs.
pub fn partition(entries: Vec<BatchEntry>) -> (Vec<BatchEntry>, Vec<BatchEntry>) {
    entries.into_iter().partition(BatchEntry::is_valid)
}

/// Combine the invalid entries and the upsert count into a result.
pub fn report(invalid: Vec<BatchEntry>, accepted_count: usize) -> BatchResult {
    BatchResult {
        accepted_count,
        rejected: invalid
            .into_iter()
            .map(|entry| (entry.first_name, entry.phone))
            .collect(),
    }
}

/// Validate and upsert a batch.
///
/// Invalid entries never stop the batch; they come back in `rejected`. A
/// storage failure aborts the whole batch with nothing persisted.
pub fn bulk_upsert(db: &Database, entries: Vec<BatchEntry>) -> Result<BatchResult, StorageError> {
    let total = entries.len();
    let (valid, invalid) = partition(entries);

    let accepted = db.upsert_all(&valid)?;
    info!(total, accepted, rejected = invalid.len(), "bulk upsert finished");

    Ok(report(invalid, accepted))
}

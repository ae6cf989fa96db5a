//! CSV export for supplier records.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Supplier;

/// Outcome of a save request.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Records were written to the given path.
    Written {
        path: PathBuf,
        record_count: usize,
    },

    /// Nothing to save; no file was created.
    Skipped,
}

/// Write supplier records to a CSV file.
///
/// The header row carries the fixed 13-column schema
/// (`id,type,name,...,latitude,longitude`), followed by one row per
/// record, UTF-8 encoded. The writer is flushed before returning. An
/// empty slice short-circuits: no file is created and `Skipped` is
/// reported.
pub fn save_csv(suppliers: &[Supplier], path: impl AsRef<Path>) -> Result<SaveOutcome> {
    if suppliers.is_empty() {
        return Ok(SaveOutcome::Skipped);
    }

    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for supplier in suppliers {
        writer.serialize(supplier)?;
    }
    writer.flush()?;

    Ok(SaveOutcome::Written {
        path: path.to_path_buf(),
        record_count: suppliers.len(),
    })
}

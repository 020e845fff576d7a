pub mod csv_file;
pub mod memory;

use crate::domain::record::Record;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use csv_file::CsvStore;
pub use memory::MemStore;

/// Column header written as the first row of every store file.
pub const HEADER: [&str; 2] = ["name", "phone"];

pub trait RecordStore {
    /// Create the backing medium with only a header if it does not exist yet.
    fn init(&self) -> Result<(), AppError>;

    fn load(&self) -> Result<Vec<Record>, AppError>;

    /// Replace the whole content with `records`.
    fn save(&self, records: &[Record]) -> Result<(), AppError>;

    /// Add `records` after the existing ones without rewriting them.
    fn append(&self, records: &[Record]) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

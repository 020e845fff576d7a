use super::*;

use csv::{ReaderBuilder, Terminator, Writer, WriterBuilder};
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "phonebook_data.csv";

/// Phone book persisted as a comma separated file with a `name,phone` header.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Sibling file the full rewrite goes through before replacing the store.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

// RFC 4180 row endings, so appends to files written by other CSV tools keep
// a single line ending style.
fn record_writer(file: File) -> Writer<File> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(file)
}

impl RecordStore for CsvStore {
    fn init(&self) -> Result<(), AppError> {
        if self.path.exists() {
            return Ok(());
        }
        create_file_parent(&self.path)?;

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;

        let mut writer = record_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;

        log::info!("Created phone book at {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Record>, AppError> {
        // No `create(true)` here: a missing store is an error, not an empty book
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: Record = result?;
            records.push(record);
        }

        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let tmp_path = self.tmp_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;

        let mut writer = record_writer(file);
        writer.write_record(HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }

        let file = writer.into_inner()?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;

        log::debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn append(&self, records: &[Record]) -> Result<(), AppError> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut writer = record_writer(file);
        if is_empty {
            writer.write_record(HEADER)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        log::debug!(
            "Appended {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

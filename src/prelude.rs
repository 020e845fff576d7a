pub use crate::cli::{command::Cli, run_app, run_session};
pub use crate::domain::{
    PhoneBook,
    record::{self, Record, RejectedEntry, UpsertOutcome, validate_phone},
};
pub use crate::errors::AppError;
pub use crate::store::{self, CsvStore, MemStore, RecordStore};

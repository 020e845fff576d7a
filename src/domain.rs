pub mod phonebook;
pub mod record;

use crate::errors::AppError;
pub use phonebook::PhoneBook;
pub use record::{Record, RejectedEntry, UpsertOutcome, validate_phone};

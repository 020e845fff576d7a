use super::*;

use std::cell::RefCell;

/// Store that keeps records in memory only. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RefCell<Vec<Record>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            data: RefCell::new(records),
        }
    }
}

impl RecordStore for MemStore {
    fn init(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn load(&self) -> Result<Vec<Record>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, records: &[Record]) -> Result<(), AppError> {
        *self.data.borrow_mut() = records.to_vec();
        Ok(())
    }

    fn append(&self, records: &[Record]) -> Result<(), AppError> {
        self.data.borrow_mut().extend_from_slice(records);
        Ok(())
    }
}

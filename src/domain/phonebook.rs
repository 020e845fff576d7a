use super::*;

use crate::store::RecordStore;

/// Record operations over a [`RecordStore`].
///
/// Every call reads the whole store, works on the records in memory and
/// writes them back. Nothing is cached between calls, so the file on disk is
/// always the source of truth.
pub struct PhoneBook {
    pub storage: Box<dyn RecordStore>,
}

impl PhoneBook {
    pub fn new(storage: Box<dyn RecordStore>) -> Self {
        Self { storage }
    }

    pub fn ensure_initialized(&self) -> Result<(), AppError> {
        self.storage.init()
    }

    pub fn list_all(&self) -> Result<Vec<Record>, AppError> {
        self.storage.load()
    }

    pub fn search(&self, pattern: &str) -> Result<Vec<Record>, AppError> {
        let records = self.storage.load()?;

        let found: Vec<Record> = records
            .into_iter()
            .filter(|record| record.matches_pattern(pattern))
            .collect();

        log::debug!("Search for {:?} matched {} records", pattern, found.len());
        Ok(found)
    }

    /// Replace the phone of the record named `name` (ignoring case), or add a
    /// new record. The phone is stored as given, without validation.
    pub fn upsert(&self, name: &str, phone: &str) -> Result<UpsertOutcome, AppError> {
        let mut records = self.storage.load()?;
        let mut outcome = UpsertOutcome::Inserted;

        for record in records.iter_mut() {
            if record.name_matches(name) {
                record.phone = phone.to_string();
                outcome = UpsertOutcome::Updated;
            }
        }

        if outcome == UpsertOutcome::Inserted {
            records.push(Record::new(name.to_string(), phone.to_string()));
        }

        self.storage.save(&records)?;

        log::info!("{} record for {:?}", outcome, name);
        Ok(outcome)
    }

    /// Append every entry with a valid phone, without merging by name.
    /// Returns the entries that were rejected.
    pub fn bulk_insert(
        &self,
        entries: Vec<(String, String)>,
    ) -> Result<Vec<RejectedEntry>, AppError> {
        let mut rejected = Vec::new();
        let mut accepted = Vec::new();

        for (name, phone) in entries {
            if validate_phone(&phone) {
                accepted.push(Record::new(name, phone));
            } else {
                rejected.push(RejectedEntry::invalid_phone(name, phone));
            }
        }

        if !accepted.is_empty() {
            self.storage.append(&accepted)?;
        }

        log::info!(
            "Bulk insert appended {} records, rejected {}",
            accepted.len(),
            rejected.len()
        );
        Ok(rejected)
    }

    pub fn paginate(&self, limit: usize, offset: usize) -> Result<Vec<Record>, AppError> {
        let records = self.storage.load()?;

        Ok(records.into_iter().skip(offset).take(limit).collect())
    }

    /// Remove every record whose name equals `value` ignoring case, or whose
    /// phone equals `value` exactly. The store is untouched when nothing matches.
    pub fn delete_by_name_or_phone(&self, value: &str) -> Result<usize, AppError> {
        let records = self.storage.load()?;
        let total = records.len();

        let kept: Vec<Record> = records
            .into_iter()
            .filter(|record| !record.matches_name_or_phone(value))
            .collect();

        let deleted = total - kept.len();
        if deleted > 0 {
            self.storage.save(&kept)?;
            log::info!("Deleted {} records matching {:?}", deleted, value);
        }

        Ok(deleted)
    }
}

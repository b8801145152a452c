use super::{FilingId, FilingRecord, ScheduledReminder};

/// Storage abstraction for filing records.
pub trait FilingRepository: Send + Sync {
    fn insert(&self, record: FilingRecord) -> Result<FilingRecord, RepositoryError>;
    fn fetch(&self, id: &FilingId) -> Result<Option<FilingRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<FilingRecord>, RepositoryError>;
}

/// Storage abstraction for reminder batches.
///
/// Batches are keyed by filing: `replace_for_filing` supersedes whatever was stored before,
/// which keeps repeated scheduling of the same filing from accumulating duplicates.
pub trait ReminderRepository: Send + Sync {
    fn replace_for_filing(
        &self,
        filing_id: &FilingId,
        reminders: Vec<ScheduledReminder>,
    ) -> Result<(), RepositoryError>;
    fn for_filing(&self, filing_id: &FilingId) -> Result<Vec<ScheduledReminder>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

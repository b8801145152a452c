use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use super::repository::{FilingRepository, ReminderRepository, RepositoryError};
use super::{FilingDraft, FilingId, FilingRecord, ScheduledReminder};
use crate::workflows::grievance::boundary::InputError;
use crate::workflows::grievance::checklist::{
    assemble_checklist, jurisdiction_guidance, FilingChecklist, JurisdictionGuidance,
};
use crate::workflows::grievance::deadline::days_until_deadline;
use crate::workflows::grievance::reminders::calculate_reminder_dates;
use crate::workflows::grievance::status::{get_deadline_status, DeadlineStatus};

static FILING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_filing_id() -> FilingId {
    let id = FILING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    FilingId(format!("filing-{id:06}"))
}

/// A filing as shown to its owner on a given day.
#[derive(Debug, Clone, Serialize)]
pub struct FilingView {
    pub filing: FilingRecord,
    pub as_of: NaiveDate,
    pub days_remaining: Option<i64>,
    pub deadline_status: DeadlineStatus,
    pub reminders: Vec<ScheduledReminder>,
    pub checklist: FilingChecklist,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<JurisdictionGuidance>,
}

/// Composes the deadline engine with filing and reminder storage.
pub struct FilingService<F, R> {
    filings: Arc<F>,
    reminders: Arc<R>,
}

impl<F, R> FilingService<F, R>
where
    F: FilingRepository + 'static,
    R: ReminderRepository + 'static,
{
    pub fn new(filings: Arc<F>, reminders: Arc<R>) -> Self {
        Self { filings, reminders }
    }

    /// Store a new filing and its initial reminder batch.
    pub fn open(&self, draft: FilingDraft, today: NaiveDate) -> Result<FilingView, FilingServiceError> {
        if draft.title.trim().is_empty() {
            return Err(InputError::Blank("title").into());
        }

        let record = FilingRecord::open(next_filing_id(), draft);
        let record = self.filings.insert(record)?;
        info!(
            filing_id = %record.id.0,
            jurisdiction = %record.jurisdiction,
            deadline = ?record.filing_deadline,
            "filing opened"
        );

        let reminders = self.schedule(&record, today)?;
        Ok(self.view(record, reminders, today))
    }

    /// Recompute the reminder batch for `filing_id`, superseding any stored batch.
    pub fn reschedule(
        &self,
        filing_id: &FilingId,
        today: NaiveDate,
    ) -> Result<Vec<ScheduledReminder>, FilingServiceError> {
        let record = self.fetch(filing_id)?;
        self.schedule(&record, today)
    }

    /// Fetch a filing with its urgency evaluated against `today`.
    pub fn get(&self, filing_id: &FilingId, today: NaiveDate) -> Result<FilingView, FilingServiceError> {
        let record = self.fetch(filing_id)?;
        let reminders = self.reminders.for_filing(filing_id)?;
        Ok(self.view(record, reminders, today))
    }

    /// Every stored filing, most recently opened first, each evaluated against `today`.
    pub fn list(&self, today: NaiveDate) -> Result<Vec<FilingView>, FilingServiceError> {
        let mut records = self.filings.list()?;
        records.sort_by(|a, b| b.id.cmp(&a.id));

        records
            .into_iter()
            .map(|record| -> Result<FilingView, FilingServiceError> {
                let reminders = self.reminders.for_filing(&record.id)?;
                Ok(self.view(record, reminders, today))
            })
            .collect()
    }

    fn fetch(&self, filing_id: &FilingId) -> Result<FilingRecord, FilingServiceError> {
        let record = self
            .filings
            .fetch(filing_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn schedule(
        &self,
        record: &FilingRecord,
        today: NaiveDate,
    ) -> Result<Vec<ScheduledReminder>, FilingServiceError> {
        let reminders: Vec<ScheduledReminder> =
            calculate_reminder_dates(record.filing_deadline, today)
                .into_iter()
                .map(|event| ScheduledReminder::for_filing(record, event))
                .collect();

        self.reminders
            .replace_for_filing(&record.id, reminders.clone())?;
        debug!(
            filing_id = %record.id.0,
            count = reminders.len(),
            %today,
            "reminder batch replaced"
        );

        Ok(reminders)
    }

    fn view(
        &self,
        filing: FilingRecord,
        reminders: Vec<ScheduledReminder>,
        today: NaiveDate,
    ) -> FilingView {
        let state = filing.state.as_ref();
        FilingView {
            as_of: today,
            days_remaining: days_until_deadline(filing.filing_deadline, today),
            deadline_status: get_deadline_status(filing.filing_deadline, today),
            reminders,
            checklist: assemble_checklist(state, filing.jurisdiction),
            guidance: jurisdiction_guidance(state, filing.jurisdiction),
            filing,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilingServiceError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

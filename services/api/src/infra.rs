use chrono::NaiveDate;
use grievance_desk::workflows::grievance::boundary;
use grievance_desk::workflows::grievance::{
    FilingId, FilingRecord, FilingRepository, ReminderRepository, RepositoryError,
    ScheduledReminder, StateCode,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable(format!("{name} mutex poisoned")))
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFilingRepository {
    records: Arc<Mutex<HashMap<FilingId, FilingRecord>>>,
}

impl FilingRepository for InMemoryFilingRepository {
    fn insert(&self, record: FilingRecord) -> Result<FilingRecord, RepositoryError> {
        let mut guard = lock(&self.records, "filing repository")?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &FilingId) -> Result<Option<FilingRecord>, RepositoryError> {
        let guard = lock(&self.records, "filing repository")?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<FilingRecord>, RepositoryError> {
        let guard = lock(&self.records, "filing repository")?;
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReminderRepository {
    batches: Arc<Mutex<HashMap<FilingId, Vec<ScheduledReminder>>>>,
}

impl ReminderRepository for InMemoryReminderRepository {
    fn replace_for_filing(
        &self,
        filing_id: &FilingId,
        reminders: Vec<ScheduledReminder>,
    ) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.batches, "reminder repository")?;
        guard.insert(filing_id.clone(), reminders);
        Ok(())
    }

    fn for_filing(&self, filing_id: &FilingId) -> Result<Vec<ScheduledReminder>, RepositoryError> {
        let guard = lock(&self.batches, "reminder repository")?;
        Ok(guard.get(filing_id).cloned().unwrap_or_default())
    }
}

impl InMemoryReminderRepository {
    /// Every stored reminder, earliest first.
    pub(crate) fn pending(&self) -> Result<Vec<ScheduledReminder>, RepositoryError> {
        let guard = lock(&self.batches, "reminder repository")?;
        let mut reminders: Vec<ScheduledReminder> = guard.values().flatten().cloned().collect();
        reminders.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(reminders)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    boundary::parse_date("date", raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_state(raw: &str) -> Result<StateCode, String> {
    StateCode::parse(raw).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grievance_desk::workflows::grievance::{FilingDraft, JurisdictionCategory};

    fn record(id: &str) -> FilingRecord {
        FilingRecord::open(
            FilingId(id.to_string()),
            FilingDraft {
                title: "Commission kickback".to_string(),
                incident_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                jurisdiction: JurisdictionCategory::StateBoard,
                state: None,
                submitted_date: None,
            },
        )
    }

    #[test]
    fn filing_repository_rejects_duplicate_ids() {
        let repository = InMemoryFilingRepository::default();
        repository.insert(record("filing-a")).expect("first insert");
        assert!(matches!(
            repository.insert(record("filing-a")),
            Err(RepositoryError::Conflict)
        ));
        assert!(repository
            .fetch(&FilingId("filing-a".to_string()))
            .expect("fetch")
            .is_some());
        repository.insert(record("filing-b")).expect("second insert");
        assert_eq!(repository.list().expect("list").len(), 2);
    }

    #[test]
    fn cli_parsers_report_bad_input() {
        assert!(parse_date("2024-02-30").is_err());
        assert_eq!(parse_state("tx").map(|code| code.to_string()), Ok("TX".to_string()));
        assert!(parse_state("T3").is_err());
    }
}

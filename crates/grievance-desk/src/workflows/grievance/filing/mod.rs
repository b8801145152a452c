//! Filing records owned by the surrounding application, plus the persistence seams and the
//! service that keeps derived deadline data and reminder batches consistent.

pub mod repository;
pub mod service;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::deadline::{calculate_filing_deadline, estimate_investigation_completion};
use super::domain::{JurisdictionCategory, StateCode};
use super::reminders::{ReminderEvent, ReminderKind};

pub use repository::{FilingRepository, ReminderRepository, RepositoryError};
pub use service::{FilingService, FilingServiceError, FilingView};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilingId(pub String);

/// Caller-supplied facts about a complaint. Carries no deadline: that is always derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingDraft {
    pub title: String,
    pub incident_date: Option<NaiveDate>,
    pub jurisdiction: JurisdictionCategory,
    pub state: Option<StateCode>,
    pub submitted_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingRecord {
    pub id: FilingId,
    pub title: String,
    pub jurisdiction: JurisdictionCategory,
    pub state: Option<StateCode>,
    pub incident_date: Option<NaiveDate>,
    pub submitted_date: Option<NaiveDate>,
    pub filing_deadline: Option<NaiveDate>,
    pub investigation_expected_completion: Option<NaiveDate>,
}

impl FilingRecord {
    pub fn open(id: FilingId, draft: FilingDraft) -> Self {
        let FilingDraft {
            title,
            incident_date,
            jurisdiction,
            state,
            submitted_date,
        } = draft;

        let filing_deadline =
            calculate_filing_deadline(incident_date, &jurisdiction.into(), state.as_ref());
        let investigation_expected_completion =
            estimate_investigation_completion(submitted_date, state.as_ref());

        Self {
            id,
            title,
            jurisdiction,
            state,
            incident_date,
            submitted_date,
            filing_deadline,
            investigation_expected_completion,
        }
    }
}

/// A reminder event bound to the filing it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReminder {
    pub filing_id: FilingId,
    pub due_date: NaiveDate,
    pub lead_days: u32,
    pub reminder_type: ReminderKind,
    pub message: String,
}

impl ScheduledReminder {
    pub fn for_filing(record: &FilingRecord, event: ReminderEvent) -> Self {
        Self {
            filing_id: record.id.clone(),
            due_date: event.due_date,
            lead_days: event.lead_days,
            reminder_type: event.reminder_type,
            message: format!("{}: {}", record.title, event.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn open_derives_deadline_and_investigation_estimate() {
        let record = FilingRecord::open(
            FilingId("filing-1".to_string()),
            FilingDraft {
                title: "Earnest money withheld".to_string(),
                incident_date: Some(date(2024, 1, 1)),
                jurisdiction: JurisdictionCategory::StateBoard,
                state: StateCode::parse("CO").ok(),
                submitted_date: Some(date(2024, 3, 1)),
            },
        );

        assert_eq!(record.filing_deadline, Some(date(2024, 12, 31)));
        assert_eq!(record.investigation_expected_completion, Some(date(2024, 10, 27)));
    }

    #[test]
    fn open_without_incident_date_has_no_deadline() {
        let record = FilingRecord::open(
            FilingId("filing-2".to_string()),
            FilingDraft {
                title: "Undated".to_string(),
                incident_date: None,
                jurisdiction: JurisdictionCategory::CivilCourt,
                state: None,
                submitted_date: None,
            },
        );
        assert_eq!(record.filing_deadline, None);
        assert_eq!(record.investigation_expected_completion, None);
    }

    #[test]
    fn scheduled_reminder_prefixes_the_title() {
        let record = FilingRecord::open(
            FilingId("filing-3".to_string()),
            FilingDraft {
                title: "Dual agency".to_string(),
                incident_date: Some(date(2024, 1, 1)),
                jurisdiction: JurisdictionCategory::NarAssociation,
                state: None,
                submitted_date: None,
            },
        );
        let event = ReminderEvent {
            due_date: date(2024, 6, 22),
            lead_days: 7,
            reminder_type: ReminderKind::FilingDeadline,
            message: "Filing deadline in 7 days".to_string(),
        };
        let scheduled = ScheduledReminder::for_filing(&record, event);
        assert_eq!(scheduled.message, "Dual agency: Filing deadline in 7 days");
        assert_eq!(scheduled.filing_id, record.id);
    }
}

//! Deadline and jurisdiction decision engine for complaints against real-estate licensees.
//!
//! Screening answers are classified into a venue, the venue and state select a filing
//! deadline, the deadline drives a reminder schedule, and urgency is recomputed on demand
//! against a caller-supplied "today". Every calculator here is a pure function; the only
//! clock read happens in the HTTP boundary.

pub mod boundary;
pub mod checklist;
mod classifier;
pub mod deadline;
pub mod domain;
pub mod filing;
pub mod reference;
pub mod reminders;
pub mod router;
pub mod status;

pub use boundary::InputError;
pub use checklist::{
    assemble_checklist, filing_checklist, jurisdiction_guidance, required_documents,
    FilingChecklist, JurisdictionGuidance,
};
pub use classifier::classify;
pub use deadline::{
    calculate_filing_deadline, days_until_deadline, estimate_investigation_completion,
    is_deadline_passed,
};
pub use domain::{
    IntakeAnswers, JurisdictionCategory, JurisdictionDecision, JurisdictionType, StateCode,
    ViolationType,
};
pub use filing::{
    FilingDraft, FilingId, FilingRecord, FilingRepository, FilingService, FilingServiceError,
    FilingView, ReminderRepository, RepositoryError, ScheduledReminder,
};
pub use reminders::{calculate_reminder_dates, write_reminder_csv, ReminderEvent, ReminderKind};
pub use router::grievance_router;
pub use status::{get_deadline_status, DeadlineStatus, StatusTag, UrgencyTag};

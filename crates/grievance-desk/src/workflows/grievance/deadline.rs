use chrono::{Duration, NaiveDate};

use super::domain::{JurisdictionType, StateCode};
use super::reference::{filing_deadline_days, investigation_timeline_days};

/// Last day a complaint may be filed, in plain calendar days from the incident.
pub fn calculate_filing_deadline(
    incident_date: Option<NaiveDate>,
    jurisdiction: &JurisdictionType,
    state: Option<&StateCode>,
) -> Option<NaiveDate> {
    let incident_date = incident_date?;
    incident_date.checked_add_signed(Duration::days(filing_deadline_days(jurisdiction, state)))
}

/// Advisory estimate of when the agency will finish investigating. Never feeds the deadline.
pub fn estimate_investigation_completion(
    submission_date: Option<NaiveDate>,
    state: Option<&StateCode>,
) -> Option<NaiveDate> {
    let submission_date = submission_date?;
    submission_date.checked_add_signed(Duration::days(investigation_timeline_days(state)))
}

/// Signed day count from `today` to the deadline; negative once it has passed.
pub fn days_until_deadline(deadline: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    deadline.map(|deadline| (deadline - today).num_days())
}

pub fn is_deadline_passed(deadline: Option<NaiveDate>, today: NaiveDate) -> bool {
    days_until_deadline(deadline, today).is_some_and(|days| days < 0)
}

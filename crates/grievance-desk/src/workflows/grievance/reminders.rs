use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io;

/// Lead times, in the order reminders are emitted.
pub const REMINDER_LEAD_DAYS: [u32; 4] = [90, 30, 7, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    FilingDeadline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderEvent {
    pub due_date: NaiveDate,
    pub lead_days: u32,
    pub reminder_type: ReminderKind,
    pub message: String,
}

pub fn reminder_message(lead_days: u32) -> String {
    let unit = if lead_days > 1 { "days" } else { "day" };
    format!("Filing deadline in {lead_days} {unit}")
}

/// Reminders that still lie strictly after `today`. Dates on or before `today` are dropped,
/// not clamped. Pure: persisting the batch (and avoiding duplicates) is the caller's job.
pub fn calculate_reminder_dates(deadline: Option<NaiveDate>, today: NaiveDate) -> Vec<ReminderEvent> {
    let Some(deadline) = deadline else {
        return Vec::new();
    };

    REMINDER_LEAD_DAYS
        .iter()
        .filter_map(|&lead_days| {
            let due_date = deadline.checked_sub_signed(Duration::days(i64::from(lead_days)))?;
            (due_date > today).then(|| ReminderEvent {
                due_date,
                lead_days,
                reminder_type: ReminderKind::FilingDeadline,
                message: reminder_message(lead_days),
            })
        })
        .collect()
}

/// Write a reminder schedule as CSV with a header row, for calendar imports.
pub fn write_reminder_csv<W: io::Write>(
    writer: W,
    reminders: &[ReminderEvent],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for reminder in reminders {
        csv_writer.serialize(reminder)?;
    }
    csv_writer.flush()?;
    Ok(())
}

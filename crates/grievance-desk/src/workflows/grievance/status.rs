use chrono::NaiveDate;
use serde::Serialize;

use super::deadline::days_until_deadline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    Unknown,
    Expired,
    Urgent,
    Approaching,
    Upcoming,
    SufficientTime,
}

impl StatusTag {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Expired => "Expired",
            Self::Urgent => "Urgent",
            Self::Approaching => "Approaching",
            Self::Upcoming => "Upcoming",
            Self::SufficientTime => "Sufficient Time",
        }
    }

    /// Styling hint for dashboards.
    pub const fn display_class(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Expired | Self::Urgent => Some("danger"),
            Self::Approaching => Some("warning"),
            Self::Upcoming => Some("info"),
            Self::SufficientTime => Some("success"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTag {
    None,
    Low,
    Medium,
    High,
    Critical,
}

/// Urgency of a deadline as seen from one particular day. Never stored; recompute per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub status: StatusTag,
    pub urgency: UrgencyTag,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_class: Option<&'static str>,
}

impl DeadlineStatus {
    fn new(status: StatusTag, urgency: UrgencyTag, message: String) -> Self {
        Self {
            status,
            urgency,
            message,
            display_class: status.display_class(),
        }
    }
}

pub fn get_deadline_status(deadline: Option<NaiveDate>, today: NaiveDate) -> DeadlineStatus {
    let Some(days_left) = days_until_deadline(deadline, today) else {
        return DeadlineStatus::new(
            StatusTag::Unknown,
            UrgencyTag::None,
            "No deadline set".to_string(),
        );
    };

    match days_left {
        d if d < 0 => DeadlineStatus::new(
            StatusTag::Expired,
            UrgencyTag::Critical,
            format!("Deadline passed {} days ago", d.abs()),
        ),
        0..=7 => DeadlineStatus::new(
            StatusTag::Urgent,
            UrgencyTag::High,
            format!("{days_left} days remaining - File immediately!"),
        ),
        8..=30 => DeadlineStatus::new(
            StatusTag::Approaching,
            UrgencyTag::Medium,
            format!("{days_left} days remaining - Begin preparation"),
        ),
        31..=90 => DeadlineStatus::new(
            StatusTag::Upcoming,
            UrgencyTag::Low,
            format!("{days_left} days remaining"),
        ),
        _ => DeadlineStatus::new(
            StatusTag::SufficientTime,
            UrgencyTag::None,
            format!("{days_left} days remaining"),
        ),
    }
}

//! Conversions applied before values reach the calculators. The engine itself only ever sees
//! well-formed `NaiveDate`s, `StateCode`s, and jurisdiction values.

use chrono::NaiveDate;

use super::domain::{JurisdictionCategory, StateCode};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} '{value}' is not a calendar date in YYYY-MM-DD form")]
    MalformedDate { field: &'static str, value: String },
    #[error("'{0}' is not a recognised state code")]
    InvalidState(String),
    #[error("'{0}' is not a recognised jurisdiction (expected state_board, nar_association, or civil_court)")]
    UnknownJurisdiction(String),
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| InputError::MalformedDate {
        field,
        value: raw.to_string(),
    })
}

pub fn parse_optional_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, InputError> {
    match raw {
        Some(value) if !value.trim().is_empty() => parse_date(field, value).map(Some),
        _ => Ok(None),
    }
}

pub fn parse_optional_state(raw: Option<&str>) -> Result<Option<StateCode>, InputError> {
    match raw {
        Some(value) if !value.trim().is_empty() => StateCode::parse(value).map(Some),
        _ => Ok(None),
    }
}

/// Strict variant for write paths where an unknown venue cannot be stored.
pub fn parse_jurisdiction(raw: &str) -> Result<JurisdictionCategory, InputError> {
    JurisdictionCategory::from_code(raw)
        .ok_or_else(|| InputError::UnknownJurisdiction(raw.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

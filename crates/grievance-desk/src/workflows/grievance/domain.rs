use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::boundary::InputError;

/// Venue a complaint is filed with. Drives the deadline rule and the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionCategory {
    CivilCourt,
    NarAssociation,
    StateBoard,
}

impl JurisdictionCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::StateBoard, Self::NarAssociation, Self::CivilCourt]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::CivilCourt => "civil_court",
            Self::NarAssociation => "nar_association",
            Self::StateBoard => "state_board",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CivilCourt => "Civil Court",
            Self::NarAssociation => "REALTOR® Association (Ethics)",
            Self::StateBoard => "State Licensing Board",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.code().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for JurisdictionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Jurisdiction as supplied by a caller, which may name a venue the tables do not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JurisdictionType {
    Known(JurisdictionCategory),
    Unrecognized(String),
}

impl JurisdictionType {
    pub fn category(&self) -> Option<JurisdictionCategory> {
        match self {
            Self::Known(category) => Some(*category),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for JurisdictionType {
    fn from(raw: &str) -> Self {
        match JurisdictionCategory::from_code(raw) {
            Some(category) => Self::Known(category),
            None => Self::Unrecognized(raw.trim().to_string()),
        }
    }
}

impl From<JurisdictionCategory> for JurisdictionType {
    fn from(category: JurisdictionCategory) -> Self {
        Self::Known(category)
    }
}

/// Upper-cased state abbreviation (`FL`, `KY`, ...). Lookups against it are case-insensitive
/// because construction normalizes the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateCode(String);

impl StateCode {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InputError::InvalidState(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StateCode {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StateCode> for String {
    fn from(value: StateCode) -> Self {
        value.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Form selects post an empty string for "no state"; treat that as absent.
pub fn deserialize_optional_state<'de, D>(deserializer: D) -> Result<Option<StateCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(value) if !value.trim().is_empty() => StateCode::parse(&value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ViolationType {
    EthicsViolation,
    LicenseViolation,
    ContractDispute,
    #[default]
    Other,
}

impl ViolationType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ethics_violation" => Self::EthicsViolation,
            "license_violation" => Self::LicenseViolation,
            "contract_dispute" => Self::ContractDispute,
            _ => Self::Other,
        }
    }
}

impl From<String> for ViolationType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Answers from the jurisdiction screening questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeAnswers {
    #[serde(default)]
    pub is_realtor: bool,
    #[serde(default)]
    pub violation_type: ViolationType,
    #[serde(default, deserialize_with = "deserialize_optional_state")]
    pub state: Option<StateCode>,
    #[serde(default)]
    pub has_contract: bool,
    #[serde(default)]
    pub seeks_damages: bool,
}

/// Outcome of screening. Returned to the caller rather than parked in session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionDecision {
    #[serde(rename = "type")]
    pub category: JurisdictionCategory,
    pub agency: String,
    pub message: String,
}

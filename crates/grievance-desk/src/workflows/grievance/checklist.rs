use serde::Serialize;

use super::domain::{JurisdictionCategory, StateCode};
use super::reference::{
    state_requirements, NarRequirements, StateRequirements, GENERIC_FILING_CHECKLIST,
    GENERIC_REQUIRED_DOCUMENTS, NAR_REQUIREMENTS,
};

/// Venue-specific requirements shown next to a filing.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JurisdictionGuidance {
    NarAssociation(&'static NarRequirements),
    State(&'static StateRequirements),
}

#[derive(Debug, Clone, Serialize)]
pub struct FilingChecklist {
    pub required_documents: Vec<&'static str>,
    pub checklist: Vec<&'static str>,
}

pub fn required_documents(
    state: Option<&StateCode>,
    jurisdiction: JurisdictionCategory,
) -> &'static [&'static str] {
    if jurisdiction == JurisdictionCategory::NarAssociation {
        return NAR_REQUIREMENTS.required_elements;
    }

    state
        .and_then(state_requirements)
        .map(|requirements| requirements.required_documents)
        .unwrap_or(GENERIC_REQUIRED_DOCUMENTS)
}

pub fn filing_checklist(
    state: Option<&StateCode>,
    jurisdiction: JurisdictionCategory,
) -> &'static [&'static str] {
    if jurisdiction == JurisdictionCategory::NarAssociation {
        return NAR_REQUIREMENTS.process_steps;
    }

    state
        .and_then(state_requirements)
        .map(|requirements| requirements.checklist)
        .unwrap_or(GENERIC_FILING_CHECKLIST)
}

pub fn assemble_checklist(
    state: Option<&StateCode>,
    jurisdiction: JurisdictionCategory,
) -> FilingChecklist {
    FilingChecklist {
        required_documents: required_documents(state, jurisdiction).to_vec(),
        checklist: filing_checklist(state, jurisdiction).to_vec(),
    }
}

/// NAR filings get the association record; any other venue gets the state record when
/// the tables know the state.
pub fn jurisdiction_guidance(
    state: Option<&StateCode>,
    jurisdiction: JurisdictionCategory,
) -> Option<JurisdictionGuidance> {
    if jurisdiction == JurisdictionCategory::NarAssociation {
        return Some(JurisdictionGuidance::NarAssociation(&NAR_REQUIREMENTS));
    }

    state
        .and_then(state_requirements)
        .map(JurisdictionGuidance::State)
}

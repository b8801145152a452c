//! Compiled-in reference data: deadline day counts, investigation timelines, and the
//! per-venue document and checklist text.

use serde::Serialize;

use super::domain::{JurisdictionCategory, JurisdictionType, StateCode};

/// Applied when neither the state nor the jurisdiction yields a day count.
pub const DEFAULT_FILING_DEADLINE_DAYS: i64 = 180;
pub const DEFAULT_INVESTIGATION_DAYS: i64 = 180;

/// State rules replace the jurisdiction default regardless of venue.
const STATE_DEADLINE_OVERRIDES: [(&str, i64); 4] =
    [("KY", 365), ("FL", 730), ("CO", 365), ("CA", 1095)];

const STATE_INVESTIGATION_TIMELINES: [(&str, i64); 1] = [("CO", 240)];

impl JurisdictionCategory {
    pub const fn default_deadline_days(self) -> i64 {
        match self {
            Self::NarAssociation => 180,
            Self::StateBoard => 365,
            Self::CivilCourt => 730,
        }
    }
}

pub fn state_deadline_override(state: &StateCode) -> Option<i64> {
    STATE_DEADLINE_OVERRIDES
        .iter()
        .find(|(code, _)| *code == state.as_str())
        .map(|(_, days)| *days)
}

/// Day count between incident and deadline: state override, then venue default, then 180.
pub fn filing_deadline_days(jurisdiction: &JurisdictionType, state: Option<&StateCode>) -> i64 {
    state
        .and_then(state_deadline_override)
        .or_else(|| {
            jurisdiction
                .category()
                .map(JurisdictionCategory::default_deadline_days)
        })
        .unwrap_or(DEFAULT_FILING_DEADLINE_DAYS)
}

pub fn investigation_timeline_days(state: Option<&StateCode>) -> i64 {
    state
        .and_then(|state| {
            STATE_INVESTIGATION_TIMELINES
                .iter()
                .find(|(code, _)| *code == state.as_str())
                .map(|(_, days)| *days)
        })
        .unwrap_or(DEFAULT_INVESTIGATION_DAYS)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactLine {
    pub kind: &'static str,
    pub value: &'static str,
}

/// What a state licensing authority expects from a complainant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateRequirements {
    pub code: &'static str,
    pub name: &'static str,
    pub agency: &'static str,
    pub form_name: &'static str,
    pub website: &'static str,
    /// Published figure; the deadline calculator reads only the override table.
    pub filing_deadline_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investigation_timeline_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidentiality_period_days: Option<i64>,
    pub notarization_required: bool,
    pub required_documents: &'static [&'static str],
    pub checklist: &'static [&'static str],
    pub notes: &'static [&'static str],
    pub contact: &'static [ContactLine],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NarRequirements {
    pub name: &'static str,
    pub complaint_type: &'static str,
    pub filing_deadline_days: i64,
    pub filed_with: &'static str,
    pub required_elements: &'static [&'static str],
    pub process_steps: &'static [&'static str],
    pub notes: &'static [&'static str],
    pub find_local_association: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub code: &'static str,
    pub name: &'static str,
}

pub static STATE_REQUIREMENTS: [StateRequirements; 5] = [
    StateRequirements {
        code: "FL",
        name: "Florida",
        agency: "Florida Department of Business and Professional Regulation (DBPR)",
        form_name: "DBPR Complaint Form",
        website: "https://www.myfloridalicense.com/dbpr/re/",
        filing_deadline_days: 730,
        investigation_timeline_days: None,
        confidentiality_period_days: Some(10),
        notarization_required: false,
        required_documents: &[
            "Front and back copies of all checks",
            "Complete sales contract",
            "All written correspondence",
            "Listing agreement (if applicable)",
            "Inspection reports (if relevant)",
        ],
        checklist: &[
            "Verify respondent's license number via DBPR website",
            "Gather all transaction documents",
            "Copy all checks (front and back)",
            "Organize correspondence chronologically",
            "Write detailed chronological narrative",
            "Complete DBPR complaint form",
            "Submit online or mail to DBPR",
        ],
        notes: &[
            "Florida has a 10-day confidentiality period after filing",
            "DBPR cannot award money or enforce contracts",
            "Process is administrative, not civil",
        ],
        contact: &[
            ContactLine { kind: "phone", value: "850-487-1395" },
            ContactLine { kind: "email", value: "DBPR.CustomerService@myfloridalicense.com" },
        ],
    },
    StateRequirements {
        code: "KY",
        name: "Kentucky",
        agency: "Kentucky Real Estate Commission (KREC)",
        form_name: "KREC Form 300 - Complaint Form",
        website: "https://krec.ky.gov/",
        filing_deadline_days: 365,
        investigation_timeline_days: None,
        confidentiality_period_days: None,
        notarization_required: true,
        required_documents: &[
            "Completed KREC Form 300",
            "Notarized signature",
            "Supporting documentation",
            "Contract copies",
            "Correspondence",
        ],
        checklist: &[
            "Download KREC Form 300",
            "Verify respondent's license status",
            "Complete all sections of Form 300",
            "Attach supporting documents",
            "Get signature notarized",
            "Mail to KREC office",
            "Keep copies for records",
        ],
        notes: &[
            "Complaint must be notarized",
            "KREC investigates license law violations",
            "Mediation services may be available",
        ],
        contact: &[
            ContactLine { kind: "phone", value: "502-429-7250" },
            ContactLine {
                kind: "address",
                value: "2365 Harrodsburg Road, Suite B-340, Lexington, KY 40504",
            },
        ],
    },
    StateRequirements {
        code: "CO",
        name: "Colorado",
        agency: "Colorado Division of Real Estate",
        form_name: "Division of Real Estate Complaint Form",
        website: "https://dre.colorado.gov/",
        filing_deadline_days: 365,
        investigation_timeline_days: Some(240),
        confidentiality_period_days: None,
        notarization_required: false,
        required_documents: &[
            "Completed complaint form",
            "All supporting documentation",
            "Contracts",
            "Correspondence",
            "Evidence of violation",
        ],
        checklist: &[
            "Verify license through DORA website",
            "Complete online or paper complaint form",
            "Attach all supporting documents",
            "Provide detailed timeline of events",
            "Submit via mail or online portal",
            "Track complaint status online",
        ],
        notes: &[
            "Colorado aims to complete investigations within 240 days",
            "Complaint must relate to license law violations",
            "Ombudsman services available for informal resolution",
        ],
        contact: &[
            ContactLine { kind: "phone", value: "303-894-2166" },
            ContactLine { kind: "email", value: "dre@state.co.us" },
        ],
    },
    StateRequirements {
        code: "CA",
        name: "California",
        agency: "California Department of Real Estate (DRE)",
        form_name: "DRE Complaint Form",
        website: "https://dre.ca.gov/",
        filing_deadline_days: 1095,
        investigation_timeline_days: None,
        confidentiality_period_days: None,
        notarization_required: false,
        required_documents: &[
            "Detailed written complaint",
            "Names and addresses of all parties",
            "Dates and locations of incidents",
            "Supporting documents",
            "Witness information",
        ],
        checklist: &[
            "Verify license on DRE website",
            "Document names, dates, locations",
            "List all witnesses",
            "Gather supporting documents",
            "Write chronological narrative",
            "Submit complaint to local DRE office",
            "Keep complaint reference number",
        ],
        notes: &[
            "DRE cannot award money or enforce contracts",
            "Process is administrative",
            "Consider consulting attorney for civil matters",
        ],
        contact: &[
            ContactLine { kind: "phone", value: "877-373-4542" },
            ContactLine {
                kind: "website",
                value: "https://dre.ca.gov/Consumers/FileComplaint.html",
            },
        ],
    },
    StateRequirements {
        code: "TX",
        name: "Texas",
        agency: "Texas Real Estate Commission (TREC)",
        form_name: "TREC Complaint Form",
        website: "https://www.trec.texas.gov/",
        filing_deadline_days: 730,
        investigation_timeline_days: None,
        confidentiality_period_days: None,
        notarization_required: false,
        required_documents: &[
            "TREC complaint form",
            "Supporting documentation",
            "Contracts and agreements",
            "Correspondence",
            "Evidence of violations",
        ],
        checklist: &[
            "Verify license on TREC website",
            "Complete TREC complaint form",
            "Attach all relevant documents",
            "Provide detailed description",
            "Submit online or by mail",
            "Note complaint number for tracking",
        ],
        notes: &[
            "TREC investigates license law violations",
            "Cannot resolve contract disputes",
            "Mediation available through local associations",
        ],
        contact: &[
            ContactLine { kind: "phone", value: "512-936-3000" },
            ContactLine { kind: "email", value: "trec@trec.texas.gov" },
        ],
    },
];

pub static NAR_REQUIREMENTS: NarRequirements = NarRequirements {
    name: "National Association of REALTORS® (NAR)",
    complaint_type: "Ethics Complaint",
    filing_deadline_days: 180,
    filed_with: "Local REALTOR® Association",
    required_elements: &[
        "Respondent must be a REALTOR® member",
        "Complaint must cite specific Code of Ethics articles",
        "Must be filed with appropriate local association",
        "Written complaint with supporting documentation",
        "Identification of all parties involved",
    ],
    process_steps: &[
        "Contact local REALTOR® association",
        "Verify respondent is NAR member",
        "Identify alleged Code violations",
        "Gather supporting documentation",
        "File written complaint with association",
        "Grievance committee reviews",
        "Possible mediation or ombudsman",
        "Professional standards hearing (if warranted)",
    ],
    notes: &[
        "Complaint must be filed within 180 days of offense or transaction closing",
        "Can only discipline NAR members",
        "Ombudsman services often available for informal resolution",
        "Process is confidential",
        "Cannot award monetary damages",
        "May result in education, warning, fine, or membership suspension/termination",
    ],
    find_local_association:
        "https://www.nar.realtor/about-nar/governing-documents/the-code-of-ethics",
};

pub(crate) const GENERIC_REQUIRED_DOCUMENTS: &[&str] = &[
    "Written complaint narrative",
    "All contracts and agreements",
    "Correspondence with respondent",
    "Supporting documentation",
    "Evidence of violation",
    "Witness information (if applicable)",
];

pub(crate) const GENERIC_FILING_CHECKLIST: &[&str] = &[
    "Verify respondent license/membership status",
    "Determine appropriate filing jurisdiction",
    "Calculate filing deadline",
    "Gather all required documentation",
    "Write detailed chronological narrative",
    "Complete required forms",
    "Submit complaint to appropriate agency",
    "Retain copies and reference numbers",
];

pub fn state_requirements(state: &StateCode) -> Option<&'static StateRequirements> {
    STATE_REQUIREMENTS
        .iter()
        .find(|requirements| requirements.code == state.as_str())
}

pub fn all_states() -> Vec<StateSummary> {
    STATE_REQUIREMENTS
        .iter()
        .map(|requirements| StateSummary {
            code: requirements.code,
            name: requirements.name,
        })
        .collect()
}

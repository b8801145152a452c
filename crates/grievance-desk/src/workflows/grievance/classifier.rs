use super::domain::{IntakeAnswers, JurisdictionCategory, JurisdictionDecision, ViolationType};

const CIVIL_AGENCY: &str = "Civil Court / Attorney";
const NAR_AGENCY: &str = "Local REALTOR® Association";
const UNSPECIFIED_STATE_AGENCY: &str = "State Real Estate Commission";

/// Route screening answers to a venue. Branches are evaluated in order and the first match
/// wins: a damages claim or contract dispute always goes to civil court, even when the
/// respondent is a REALTOR® and the conduct is an ethics matter.
pub fn classify(answers: &IntakeAnswers) -> JurisdictionDecision {
    if answers.seeks_damages || answers.violation_type == ViolationType::ContractDispute {
        return JurisdictionDecision {
            category: JurisdictionCategory::CivilCourt,
            agency: CIVIL_AGENCY.to_string(),
            message: "This appears to be a contract dispute. You may need to consult an attorney or file in civil court.".to_string(),
        };
    }

    if answers.is_realtor && answers.violation_type == ViolationType::EthicsViolation {
        return JurisdictionDecision {
            category: JurisdictionCategory::NarAssociation,
            agency: NAR_AGENCY.to_string(),
            message: "This is an ethics complaint against a NAR member. File with your local REALTOR® association.".to_string(),
        };
    }

    let base_message = "This is a license law complaint. File with your state licensing board.";
    match &answers.state {
        Some(state) => JurisdictionDecision {
            category: JurisdictionCategory::StateBoard,
            agency: format!("{state} Real Estate Commission"),
            message: base_message.to_string(),
        },
        None => JurisdictionDecision {
            category: JurisdictionCategory::StateBoard,
            agency: UNSPECIFIED_STATE_AGENCY.to_string(),
            message: format!(
                "{base_message} Select the state where the licensee practices to identify the board."
            ),
        },
    }
}

use crate::infra::{parse_date, parse_state, InMemoryFilingRepository, InMemoryReminderRepository};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use grievance_desk::error::AppError;
use grievance_desk::workflows::grievance::{
    assemble_checklist, calculate_filing_deadline, calculate_reminder_dates, classify,
    days_until_deadline, estimate_investigation_completion, get_deadline_status,
    write_reminder_csv, DeadlineStatus, FilingDraft, FilingService, IntakeAnswers,
    JurisdictionCategory, JurisdictionDecision, JurisdictionType, ReminderEvent, StateCode,
    ViolationType,
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DeadlineArgs {
    /// Date of the incident (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) incident_date: NaiveDate,
    /// Jurisdiction: state_board, nar_association, or civil_court
    #[arg(long)]
    pub(crate) jurisdiction: String,
    /// Two-letter state code; known states override the jurisdiction default
    #[arg(long, value_parser = parse_state)]
    pub(crate) state: Option<StateCode>,
    /// Date the complaint was (or will be) submitted, for the investigation estimate
    #[arg(long, value_parser = parse_date)]
    pub(crate) submitted: Option<NaiveDate>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the reminder schedule to this CSV file
    #[arg(long)]
    pub(crate) reminders_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Nature of the complaint: ethics_violation, license_violation, contract_dispute, other
    #[arg(long)]
    pub(crate) violation_type: String,
    /// State where the licensee practices
    #[arg(long, value_parser = parse_state)]
    pub(crate) state: Option<StateCode>,
    /// The licensee is a REALTOR® (NAR member)
    #[arg(long)]
    pub(crate) realtor: bool,
    /// A written contract is involved
    #[arg(long)]
    pub(crate) has_contract: bool,
    /// The complainant wants monetary damages
    #[arg(long)]
    pub(crate) seeks_damages: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the walkthrough (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// State used for the sample license-law complaint
    #[arg(long, value_parser = parse_state)]
    pub(crate) state: Option<StateCode>,
}

pub(crate) fn run_deadline(args: DeadlineArgs) -> Result<(), AppError> {
    let DeadlineArgs {
        incident_date,
        jurisdiction,
        state,
        submitted,
        today,
        reminders_csv,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let jurisdiction = JurisdictionType::from(jurisdiction.as_str());
    let deadline = calculate_filing_deadline(Some(incident_date), &jurisdiction, state.as_ref());
    let status = get_deadline_status(deadline, today);
    let reminders = calculate_reminder_dates(deadline, today);

    println!("Filing deadline calculator");
    match &jurisdiction {
        JurisdictionType::Known(category) => println!("Jurisdiction: {}", category.label()),
        JurisdictionType::Unrecognized(raw) => {
            println!("Jurisdiction: '{raw}' not recognised, using the default window")
        }
    }
    if let Some(state) = &state {
        println!("State: {state}");
    }
    println!("Incident date: {incident_date} (evaluated {today})");
    render_deadline(deadline, days_until_deadline(deadline, today), &status);

    if let Some(estimate) = estimate_investigation_completion(submitted, state.as_ref()) {
        println!("Estimated investigation completion: {estimate}");
    }

    render_reminders(&reminders);

    if let Some(path) = reminders_csv {
        let file = File::create(&path)?;
        write_reminder_csv(file, &reminders)?;
        println!("Reminder schedule written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let answers = IntakeAnswers {
        is_realtor: args.realtor,
        violation_type: ViolationType::parse(&args.violation_type),
        state: args.state,
        has_contract: args.has_contract,
        seeks_damages: args.seeks_damages,
    };

    let decision = classify(&answers);
    render_decision(&decision, answers.state.as_ref());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, state } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let state = match state {
        Some(state) => state,
        None => StateCode::parse("CO")?,
    };

    println!("Grievance desk walkthrough (evaluated {today})");

    let answers = IntakeAnswers {
        is_realtor: false,
        violation_type: ViolationType::LicenseViolation,
        state: Some(state.clone()),
        has_contract: true,
        seeks_damages: false,
    };
    let decision = classify(&answers);
    render_decision(&decision, Some(&state));

    let filings = Arc::new(InMemoryFilingRepository::default());
    let reminders = Arc::new(InMemoryReminderRepository::default());
    let service = FilingService::new(filings, reminders.clone());

    let draft = FilingDraft {
        title: "Unlicensed property management".to_string(),
        incident_date: Some(today - Duration::days(200)),
        jurisdiction: decision.category,
        state: Some(state),
        submitted_date: Some(today),
    };

    let view = match service.open(draft, today) {
        Ok(view) => view,
        Err(err) => {
            println!("  Filing rejected: {err}");
            return Ok(());
        }
    };

    println!("\nFiling {} opened", view.filing.id.0);
    render_deadline(
        view.filing.filing_deadline,
        view.days_remaining,
        &view.deadline_status,
    );
    if let Some(estimate) = view.filing.investigation_expected_completion {
        println!("Estimated investigation completion: {estimate}");
    }

    if let Err(err) = service.reschedule(&view.filing.id, today) {
        println!("  Reminder rescheduling unavailable: {err}");
    }
    match reminders.pending() {
        Ok(queue) if queue.is_empty() => println!("\nReminder queue: empty"),
        Ok(queue) => {
            println!("\nReminder queue (one batch per filing after rescheduling)");
            for reminder in queue {
                println!("- {} | {}", reminder.due_date, reminder.message);
            }
        }
        Err(err) => println!("\nReminder queue unavailable: {err}"),
    }

    if let Some(deadline) = view.filing.filing_deadline {
        println!("\nStatus outlook");
        for offset in [0_i64, 30, 90] {
            let day = today + Duration::days(offset);
            let status = get_deadline_status(Some(deadline), day);
            println!("- {day}: [{}] {}", status.status.label(), status.message);
        }
    }

    match serde_json::to_string_pretty(&view.deadline_status) {
        Ok(json) => println!("\nStatus payload:\n{json}"),
        Err(err) => println!("\nStatus payload unavailable: {err}"),
    }

    Ok(())
}

fn render_decision(decision: &JurisdictionDecision, state: Option<&StateCode>) {
    println!("\nJurisdiction screening");
    println!("- Venue: {} ({})", decision.category.label(), decision.category);
    println!("- File with: {}", decision.agency);
    println!("- {}", decision.message);

    let checklist = assemble_checklist(state, decision.category);
    println!("\nRequired documents");
    for document in &checklist.required_documents {
        println!("- {document}");
    }
    println!("\nFiling checklist");
    for (index, step) in checklist.checklist.iter().enumerate() {
        println!("{}. {step}", index + 1);
    }

    if decision.category == JurisdictionCategory::StateBoard && state.is_none() {
        println!("\nNo state supplied: the generic checklist applies.");
    }
}

fn render_deadline(deadline: Option<NaiveDate>, days_remaining: Option<i64>, status: &DeadlineStatus) {
    match (deadline, days_remaining) {
        (Some(deadline), Some(days)) => {
            println!("Filing deadline: {deadline} ({days} days from evaluation date)")
        }
        _ => println!("Filing deadline: not set"),
    }
    println!("Status: [{}] {}", status.status.label(), status.message);
}

fn render_reminders(reminders: &[ReminderEvent]) {
    if reminders.is_empty() {
        println!("\nReminders: none remaining");
        return;
    }

    println!("\nReminders");
    for reminder in reminders {
        println!("- {}: {}", reminder.due_date, reminder.message);
    }
}

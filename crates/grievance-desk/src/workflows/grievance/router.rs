use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::boundary::{
    parse_date, parse_jurisdiction, parse_optional_date, parse_optional_state, InputError,
};
use super::checklist::assemble_checklist;
use super::classifier::classify;
use super::deadline::{calculate_filing_deadline, days_until_deadline};
use super::domain::{IntakeAnswers, JurisdictionCategory, JurisdictionDecision, JurisdictionType, StateCode};
use super::filing::{
    FilingDraft, FilingId, FilingRepository, FilingService, FilingView, ReminderRepository,
    ScheduledReminder,
};
use super::reference::{all_states, StateSummary};
use super::status::{get_deadline_status, DeadlineStatus};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct DeadlineCalculatorRequest {
    pub incident_date: String,
    pub jurisdiction_type: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeadlineCalculatorResponse {
    pub deadline: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub status: DeadlineStatus,
}

#[derive(Debug, Deserialize)]
pub struct OpenFilingRequest {
    pub title: String,
    #[serde(default)]
    pub incident_date: Option<String>,
    pub jurisdiction_type: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub submitted_date: Option<String>,
    #[serde(default)]
    pub today: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AsOfQuery {
    #[serde(default)]
    pub today: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChecklistQuery {
    #[serde(default)]
    pub jurisdiction_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub state: StateCode,
    pub jurisdiction_type: JurisdictionCategory,
    pub required_documents: Vec<&'static str>,
    pub checklist: Vec<&'static str>,
}

/// Router exposing screening, deadline calculation, filings, and checklists.
pub fn grievance_router<F, R>(service: Arc<FilingService<F, R>>) -> Router
where
    F: FilingRepository + 'static,
    R: ReminderRepository + 'static,
{
    Router::new()
        .route("/api/v1/jurisdiction/screening", post(screening_handler))
        .route("/api/v1/deadline-calculator", post(deadline_calculator_handler))
        .route(
            "/api/v1/filings",
            post(open_filing_handler::<F, R>).get(list_filings_handler::<F, R>),
        )
        .route("/api/v1/filings/:filing_id", get(filing_handler::<F, R>))
        .route(
            "/api/v1/filings/:filing_id/reminders",
            post(reschedule_handler::<F, R>),
        )
        .route("/api/v1/states", get(states_handler))
        .route("/api/v1/states/:code/checklist", get(checklist_handler))
        .with_state(service)
}

/// The one place the wall clock is consulted; callers may pin the day explicitly.
fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, InputError> {
    Ok(parse_optional_date("today", raw)?.unwrap_or_else(|| Local::now().date_naive()))
}

pub async fn screening_handler(Json(answers): Json<IntakeAnswers>) -> Json<JurisdictionDecision> {
    Json(classify(&answers))
}

pub async fn deadline_calculator_handler(
    Json(request): Json<DeadlineCalculatorRequest>,
) -> Result<Json<DeadlineCalculatorResponse>, AppError> {
    let incident_date = parse_date("incident_date", &request.incident_date)?;
    let state = parse_optional_state(request.state.as_deref())?;
    let today = resolve_today(request.today.as_deref())?;
    let jurisdiction = JurisdictionType::from(request.jurisdiction_type.as_str());

    let deadline = calculate_filing_deadline(Some(incident_date), &jurisdiction, state.as_ref());

    Ok(Json(DeadlineCalculatorResponse {
        deadline,
        days_remaining: days_until_deadline(deadline, today),
        status: get_deadline_status(deadline, today),
    }))
}

pub async fn open_filing_handler<F, R>(
    State(service): State<Arc<FilingService<F, R>>>,
    Json(request): Json<OpenFilingRequest>,
) -> Result<(StatusCode, Json<FilingView>), AppError>
where
    F: FilingRepository + 'static,
    R: ReminderRepository + 'static,
{
    let draft = FilingDraft {
        title: request.title,
        incident_date: parse_optional_date("incident_date", request.incident_date.as_deref())?,
        jurisdiction: parse_jurisdiction(&request.jurisdiction_type)?,
        state: parse_optional_state(request.state.as_deref())?,
        submitted_date: parse_optional_date("submitted_date", request.submitted_date.as_deref())?,
    };
    let today = resolve_today(request.today.as_deref())?;

    let view = service.open(draft, today)?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn list_filings_handler<F, R>(
    State(service): State<Arc<FilingService<F, R>>>,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<Vec<FilingView>>, AppError>
where
    F: FilingRepository + 'static,
    R: ReminderRepository + 'static,
{
    let today = resolve_today(query.today.as_deref())?;
    let views = service.list(today)?;
    Ok(Json(views))
}

pub async fn filing_handler<F, R>(
    State(service): State<Arc<FilingService<F, R>>>,
    Path(filing_id): Path<String>,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<FilingView>, AppError>
where
    F: FilingRepository + 'static,
    R: ReminderRepository + 'static,
{
    let today = resolve_today(query.today.as_deref())?;
    let view = service.get(&FilingId(filing_id), today)?;
    Ok(Json(view))
}

pub async fn reschedule_handler<F, R>(
    State(service): State<Arc<FilingService<F, R>>>,
    Path(filing_id): Path<String>,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<Vec<ScheduledReminder>>, AppError>
where
    F: FilingRepository + 'static,
    R: ReminderRepository + 'static,
{
    let today = resolve_today(query.today.as_deref())?;
    let reminders = service.reschedule(&FilingId(filing_id), today)?;
    Ok(Json(reminders))
}

pub async fn states_handler() -> Json<Vec<StateSummary>> {
    Json(all_states())
}

pub async fn checklist_handler(
    Path(code): Path<String>,
    Query(query): Query<ChecklistQuery>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let state = StateCode::parse(&code)?;
    let jurisdiction = match query.jurisdiction_type.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_jurisdiction(raw)?,
        _ => JurisdictionCategory::StateBoard,
    };

    let checklist = assemble_checklist(Some(&state), jurisdiction);
    Ok(Json(ChecklistResponse {
        state,
        jurisdiction_type: jurisdiction,
        required_documents: checklist.required_documents,
        checklist: checklist.checklist,
    }))
}

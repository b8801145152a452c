//! HTTP-level specifications for screening, deadline calculation, and filing lifecycle,
//! exercised through the public router with in-memory storage.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use grievance_desk::workflows::grievance::{
        FilingId, FilingRecord, FilingRepository, FilingService, ReminderRepository,
        RepositoryError, ScheduledReminder,
    };

    #[derive(Default)]
    pub(super) struct Filings {
        records: Mutex<HashMap<FilingId, FilingRecord>>,
    }

    impl FilingRepository for Filings {
        fn insert(&self, record: FilingRecord) -> Result<FilingRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("filings mutex poisoned");
            if guard.contains_key(&record.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.id.clone(), record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &FilingId) -> Result<Option<FilingRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("filings mutex poisoned")
                .get(id)
                .cloned())
        }

        fn list(&self) -> Result<Vec<FilingRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("filings mutex poisoned")
                .values()
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    pub(super) struct Reminders {
        batches: Mutex<HashMap<FilingId, Vec<ScheduledReminder>>>,
    }

    impl ReminderRepository for Reminders {
        fn replace_for_filing(
            &self,
            filing_id: &FilingId,
            reminders: Vec<ScheduledReminder>,
        ) -> Result<(), RepositoryError> {
            self.batches
                .lock()
                .expect("reminders mutex poisoned")
                .insert(filing_id.clone(), reminders);
            Ok(())
        }

        fn for_filing(
            &self,
            filing_id: &FilingId,
        ) -> Result<Vec<ScheduledReminder>, RepositoryError> {
            Ok(self
                .batches
                .lock()
                .expect("reminders mutex poisoned")
                .get(filing_id)
                .cloned()
                .unwrap_or_default())
        }
    }

    pub(super) fn build_service() -> (Arc<FilingService<Filings, Reminders>>, Arc<Reminders>) {
        let reminders = Arc::new(Reminders::default());
        let service = Arc::new(FilingService::new(
            Arc::new(Filings::default()),
            reminders.clone(),
        ));
        (service, reminders)
    }
}

mod routes {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use grievance_desk::workflows::grievance::{grievance_router, FilingId, ReminderRepository};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let (service, _) = build_service();
        grievance_router(service)
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&payload).expect("serialize payload"),
            ))
            .expect("request")
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn screening_returns_decision_payload() {
        let response = build_router()
            .oneshot(post_json(
                "/api/v1/jurisdiction/screening",
                json!({
                    "is_realtor": false,
                    "violation_type": "license_violation",
                    "state": "co",
                    "has_contract": false,
                    "seeks_damages": false,
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["type"], "state_board");
        assert_eq!(payload["agency"], "CO Real Estate Commission");
    }

    #[tokio::test]
    async fn screening_without_violation_type_routes_to_the_state_board() {
        let response = build_router()
            .oneshot(post_json(
                "/api/v1/jurisdiction/screening",
                json!({ "is_realtor": true, "state": "FL" }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["type"], "state_board");
        assert_eq!(payload["agency"], "FL Real Estate Commission");
    }

    #[tokio::test]
    async fn deadline_calculator_serializes_dates_as_iso_days() {
        let response = build_router()
            .oneshot(post_json(
                "/api/v1/deadline-calculator",
                json!({
                    "incident_date": "2024-01-01",
                    "jurisdiction_type": "nar_association",
                    "state": "FL",
                    "today": "2024-01-01",
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["deadline"], "2025-12-31");
        assert_eq!(payload["days_remaining"], 730);
        assert_eq!(payload["status"]["status"], "sufficient_time");
        assert_eq!(payload["status"]["urgency"], "none");
    }

    #[tokio::test]
    async fn deadline_calculator_rejects_malformed_incident_date() {
        let response = build_router()
            .oneshot(post_json(
                "/api/v1/deadline-calculator",
                json!({
                    "incident_date": "January 1st",
                    "jurisdiction_type": "state_board",
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json(response).await;
        assert!(payload["error"]
            .as_str()
            .is_some_and(|message| message.contains("incident_date")));
    }

    #[tokio::test]
    async fn filing_lifecycle_recomputes_status_and_replaces_reminders() {
        let (service, reminders) = build_service();
        let router = grievance_router(service);

        let response = router
            .clone()
            .oneshot(post_json(
                "/api/v1/filings",
                json!({
                    "title": "Undisclosed dual agency",
                    "incident_date": "2024-01-01",
                    "jurisdiction_type": "nar_association",
                    "today": "2024-01-10",
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        assert_eq!(created["filing"]["filing_deadline"], "2024-06-29");
        assert_eq!(created["reminders"].as_array().map(Vec::len), Some(4));
        assert_eq!(
            created["reminders"][0]["message"],
            "Undisclosed dual agency: Filing deadline in 90 days"
        );
        assert_eq!(created["guidance"]["kind"], "nar_association");
        let filing_id = created["filing"]["id"]
            .as_str()
            .expect("filing id")
            .to_string();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/filings/{filing_id}?today=2024-06-20"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let current = read_json(response).await;
        assert_eq!(current["days_remaining"], 9);
        assert_eq!(current["deadline_status"]["status"], "approaching");

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(format!("/api/v1/filings/{filing_id}/reminders?today=2024-06-20"))
                        .body(Body::empty())
                        .expect("request"),
                )
                .await
                .expect("router dispatch");
            assert_eq!(response.status(), StatusCode::OK);
        }

        let stored = reminders
            .for_filing(&FilingId(filing_id))
            .expect("stored reminders");
        let leads: Vec<u32> = stored.iter().map(|reminder| reminder.lead_days).collect();
        assert_eq!(leads, vec![7, 1]);
    }

    #[tokio::test]
    async fn filing_list_recomputes_each_status_for_the_requested_day() {
        let router = build_router();

        for (title, incident_date, state) in [
            ("Misused escrow deposit", "2024-01-01", None),
            ("Unlicensed showing agent", "2024-03-01", Some("FL")),
        ] {
            let response = router
                .clone()
                .oneshot(post_json(
                    "/api/v1/filings",
                    json!({
                        "title": title,
                        "incident_date": incident_date,
                        "jurisdiction_type": "civil_court",
                        "state": state,
                        "today": "2024-01-10",
                    }),
                ))
                .await
                .expect("router dispatch");
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/filings?today=2025-12-10")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let listed = read_json(response).await;
        let listed = listed.as_array().expect("filing list");
        assert_eq!(listed.len(), 2);

        assert_eq!(listed[0]["filing"]["title"], "Unlicensed showing agent");
        assert_eq!(listed[0]["filing"]["filing_deadline"], "2026-03-01");
        assert_eq!(listed[0]["days_remaining"], 81);
        assert_eq!(listed[0]["deadline_status"]["status"], "upcoming");
        assert_eq!(listed[0]["guidance"]["kind"], "state");
        assert_eq!(listed[0]["guidance"]["code"], "FL");

        assert_eq!(listed[1]["filing"]["title"], "Misused escrow deposit");
        assert_eq!(listed[1]["filing"]["filing_deadline"], "2025-12-31");
        assert_eq!(listed[1]["days_remaining"], 21);
        assert_eq!(listed[1]["deadline_status"]["status"], "approaching");
        assert!(listed[1].get("guidance").is_none());
    }

    #[tokio::test]
    async fn unknown_filing_is_not_found() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/filings/filing-999999?today=2024-01-01")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn filing_requires_a_known_jurisdiction() {
        let response = build_router()
            .oneshot(post_json(
                "/api/v1/filings",
                json!({
                    "title": "Escrow shortfall",
                    "incident_date": "2024-01-01",
                    "jurisdiction_type": "small_claims",
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn states_and_checklists_are_listed() {
        let router = build_router();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/states")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let states = read_json(response).await;
        assert_eq!(states.as_array().map(Vec::len), Some(5));
        assert_eq!(states[0]["code"], "FL");

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/states/ky/checklist?jurisdiction_type=nar_association")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let checklist = read_json(response).await;
        assert_eq!(checklist["state"], "KY");
        assert_eq!(checklist["checklist"][0], "Contact local REALTOR® association");
    }
}

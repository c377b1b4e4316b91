//! Integration scenarios for the questionnaire workflow.
//!
//! Scenarios drive the public service facade and the HTTP routers so scoring, lifecycle rules,
//! and admin access are checked without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use creative_style::assessment::{
        AdminAuthenticator, Answer, AssessmentService, Axis, QuestionCatalog, RepositoryError,
        Submission, SubmissionFilter, SubmissionId, SubmissionRepository,
    };
    use creative_style::config::AdminConfig;

    #[derive(Default)]
    pub(super) struct InMemorySubmissions {
        records: Mutex<HashMap<SubmissionId, Submission>>,
    }

    impl SubmissionRepository for InMemorySubmissions {
        fn insert(&self, submission: Submission) -> Result<Submission, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&submission.submission_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(submission.submission_id.clone(), submission.clone());
            Ok(submission)
        }

        fn modify<T, E, F>(&self, id: &SubmissionId, apply: F) -> Result<T, E>
        where
            F: FnOnce(&mut Submission) -> Result<T, E>,
            E: From<RepositoryError>,
        {
            let mut guard = self.records.lock().expect("lock");
            let existing = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
            let mut working = existing.clone();
            let value = apply(&mut working)?;
            *existing = working;
            Ok(value)
        }

        fn fetch(&self, id: &SubmissionId) -> Result<Option<Submission>, RepositoryError> {
            Ok(self.records.lock().expect("lock").get(id).cloned())
        }

        fn list(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("lock")
                .values()
                .filter(|submission| filter.matches(submission))
                .cloned()
                .collect())
        }
    }

    pub(super) fn service() -> Arc<AssessmentService<InMemorySubmissions>> {
        Arc::new(AssessmentService::new(Arc::new(
            InMemorySubmissions::default(),
        )))
    }

    pub(super) fn authenticator() -> Arc<AdminAuthenticator> {
        Arc::new(AdminAuthenticator::new(&AdminConfig {
            username: "coordinator".to_string(),
            password: Some("workshop-2025".to_string()),
            token_secret: "integration-secret".to_string(),
            token_ttl_hours: 2,
        }))
    }

    /// Answers for all scale questions, choosing the value per axis and polarity.
    pub(super) fn answers_by_key(
        pick: impl Fn(Axis, bool) -> i32,
    ) -> Vec<Answer> {
        QuestionCatalog::standard()
            .scale_questions()
            .filter_map(|question| {
                let (axis, polarity) = question.scoring()?;
                let reverse = polarity.sign() < 0;
                Some(Answer::numeric(question.id, pick(axis, reverse)))
            })
            .collect()
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use creative_style::assessment::{
    admin_router, assessment_router, Answer, Axis, OverallStyle, Respondent, Strength,
    SubmissionFilter,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::*;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[test]
fn strongly_experiential_producer_is_conceptual() {
    let service = service();
    let submission = service
        .start(Respondent {
            name: "Lin".to_string(),
            email: "lin@example.com".to_string(),
        })
        .expect("start");

    // Agree with every experience item and every production item.
    let answers = answers_by_key(|axis, reverse| match (axis, reverse) {
        (Axis::Learning, false) | (Axis::Application, true) => 7,
        _ => 1,
    });
    for answer in answers {
        service
            .record_response(&submission.submission_id, answer)
            .expect("recorded");
    }

    let scores = service
        .complete(&submission.submission_id)
        .expect("complete");
    assert_eq!(scores.learning_score, 45);
    assert_eq!(scores.application_score, -45);

    let result = service
        .results(&submission.submission_id)
        .expect("results");
    assert_eq!(result.labels.overall_style, OverallStyle::Conceptual);
    assert_eq!(result.labels.learning_strength, Strength::Strong);
    assert_eq!(result.labels.application_strength, Strength::Strong);
}

#[test]
fn completed_submissions_appear_in_admin_listing() {
    let service = service();
    let open = service.start(Respondent::default()).expect("start");
    let done = service.start(Respondent::default()).expect("start");
    for answer in answers_by_key(|_, _| 4) {
        service
            .record_response(&done.submission_id, answer)
            .expect("recorded");
    }
    service.complete(&done.submission_id).expect("complete");

    let complete = service
        .list(&SubmissionFilter {
            is_complete: Some(true),
            ..SubmissionFilter::default()
        })
        .expect("list");
    assert_eq!(complete.len(), 1);
    assert_eq!(complete[0].submission_id, done.submission_id);

    let pending = service
        .list(&SubmissionFilter {
            is_complete: Some(false),
            ..SubmissionFilter::default()
        })
        .expect("list");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].submission_id, open.submission_id);
}

#[tokio::test]
async fn respondent_and_admin_share_one_router() {
    let service = service();
    let router = assessment_router(service.clone()).merge(admin_router(service, authenticator()));

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/start")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "name": "Kai", "email": "" }).to_string()))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let submission_id = body_json(response).await["submission_id"]
        .as_str()
        .expect("id")
        .to_string();

    let mut body = serde_json::to_value(Answer::text("Q33", "Use it as a plant pot")).expect("json");
    body["submission_id"] = json!(submission_id);
    let response = router
        .clone()
        .oneshot(
            Request::post("/api/submit-response")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/admin/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "username": "coordinator", "password": "workshop-2025" }).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let login = body_json(response).await;
    assert_eq!(login["username"], "coordinator");
    let token = login["token"].as_str().expect("token").to_string();

    let response = router
        .oneshot(
            Request::get(format!("/api/admin/submissions/{submission_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["user_name"], "Kai");
    assert_eq!(detail["is_complete"], false);
    assert_eq!(detail["responses"][0]["text_response"], "Use it as a plant pot");
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::auth::AdminAuthenticator;
use crate::assessment::catalog::{Axis, QuestionCatalog};
use crate::assessment::domain::{Answer, Submission, SubmissionId};
use crate::assessment::repository::{RepositoryError, SubmissionFilter, SubmissionRepository};
use crate::assessment::service::AssessmentService;
use crate::config::AdminConfig;

pub(super) const ADMIN_PASSWORD: &str = "let-me-in";

/// Reverse-scored items, listed independently of the catalog so tests can cross-check it.
const REVERSE_ITEMS: [u32; 10] = [5, 11, 17, 23, 29, 6, 12, 18, 24, 30];

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<SubmissionId, Submission>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, submission: Submission) -> Result<Submission, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
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
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut working = stored.clone();
        let value = apply(&mut working)?;
        *stored = working;
        Ok(value)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<Submission>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|submission| filter.matches(submission))
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _submission: Submission) -> Result<Submission, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify<T, E, F>(&self, _id: &SubmissionId, _apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut Submission) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("database offline".to_string()).into())
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<Submission>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Wraps [`MemoryRepository`]. Once armed, the next `parties` calls to `modify` wait at a
/// barrier so competing writers reach the store together.
pub(super) struct GatedRepository {
    pub(super) inner: MemoryRepository,
    parties: usize,
    gate: Barrier,
    remaining: AtomicUsize,
}

impl GatedRepository {
    pub(super) fn new(parties: usize) -> Self {
        Self {
            inner: MemoryRepository::default(),
            parties,
            gate: Barrier::new(parties),
            remaining: AtomicUsize::new(0),
        }
    }

    pub(super) fn arm(&self) {
        self.remaining.store(self.parties, Ordering::SeqCst);
    }
}

impl SubmissionRepository for GatedRepository {
    fn insert(&self, submission: Submission) -> Result<Submission, RepositoryError> {
        self.inner.insert(submission)
    }

    fn modify<T, E, F>(&self, id: &SubmissionId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut Submission) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let gated = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if gated {
            self.gate.wait();
        }
        self.inner.modify(id, apply)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<Submission>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn list(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError> {
        self.inner.list(filter)
    }
}

pub(super) fn catalog() -> &'static QuestionCatalog {
    QuestionCatalog::standard()
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    (AssessmentService::new(repository.clone()), repository)
}

pub(super) fn admin_config() -> AdminConfig {
    AdminConfig {
        username: "admin".to_string(),
        password: Some(ADMIN_PASSWORD.to_string()),
        token_secret: "routing-test-secret".to_string(),
        token_ttl_hours: 1,
    }
}

pub(super) fn authenticator() -> Arc<AdminAuthenticator> {
    Arc::new(AdminAuthenticator::new(&admin_config()))
}

/// Every scale question answered with `learning` or `application` depending on its axis.
pub(super) fn axis_answers(learning: i32, application: i32) -> Vec<Answer> {
    catalog()
        .scale_questions()
        .map(|question| {
            let value = match question.axis {
                Some(Axis::Learning) => learning,
                _ => application,
            };
            Answer::numeric(question.id, value)
        })
        .collect()
}

/// Scale answers `Q1..Q30` taken in order from `responses`.
pub(super) fn ordered_answers(responses: &[i32]) -> Vec<Answer> {
    responses
        .iter()
        .enumerate()
        .map(|(index, value)| Answer::numeric(format!("Q{}", index + 1), *value))
        .collect()
}

pub(super) fn text_answers() -> Vec<Answer> {
    vec![
        Answer::text("Q31", "Doorstop, bookend, garden border"),
        Answer::text("Q32", "Soak them first"),
        Answer::text("Q33", "Keep coffee warm"),
        Answer::text("Q34", "They all followed the same rumor"),
    ]
}

/// Axis totals worked out from the published item key rather than the catalog structs.
pub(super) fn hand_computed(responses: &[i32]) -> (i32, i32) {
    let mut learning = 0;
    let mut application = 0;
    for (index, response) in responses.iter().enumerate() {
        let item = index as u32 + 1;
        let sign = if REVERSE_ITEMS.contains(&item) { -1 } else { 1 };
        let contribution = sign * (response - 4);
        if item % 2 == 1 {
            learning += contribution;
        } else {
            application += contribution;
        }
    }
    (learning, application)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

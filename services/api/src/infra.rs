use creative_style::assessment::{
    RepositoryError, Submission, SubmissionFilter, SubmissionId, SubmissionRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local submission store used by the HTTP service.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<HashMap<SubmissionId, Submission>>>,
}

impl InMemorySubmissionRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SubmissionId, Submission>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("submission store poisoned".to_string()))
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(&self, submission: Submission) -> Result<Submission, RepositoryError> {
        let mut guard = self.lock()?;
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
        let mut guard = self.lock()?;
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        // Work on a copy so a rejected change leaves the record untouched.
        let mut working = stored.clone();
        let value = apply(&mut working)?;
        *stored = working;
        Ok(value)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<Submission>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn list(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError> {
        Ok(self
            .lock()?
            .values()
            .filter(|submission| filter.matches(submission))
            .cloned()
            .collect())
    }
}

//! Creative cognitive style questionnaire.
//!
//! The [`assessment::scoring`] module holds the pure scoring and classification engine; the
//! rest of [`assessment`] wraps it in the submission workflow, admin authentication, and the
//! HTTP routers consumed by the API service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

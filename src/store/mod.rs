pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::Submission;

pub use postgres::PgSubmissionStore;

/// Where accepted submissions are written.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist the payload exactly as received.
    async fn insert(&self, payload: &Value) -> Result<Submission, String>;
}

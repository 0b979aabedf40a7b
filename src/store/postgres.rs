use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::db;
use crate::models::Submission;

use super::SubmissionStore;

pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, payload: &Value) -> Result<Submission, String> {
        db::submissions::create(&self.pool, payload)
            .await
            .map_err(|e| e.to_string())
    }
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Submission;

pub async fn create(pool: &PgPool, payload: &serde_json::Value) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (id, payload) VALUES ($1, $2) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(payload)
    .fetch_one(pool)
    .await
}

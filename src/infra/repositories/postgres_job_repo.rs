use crate::domain::{models::job::Job, ports::JobRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresJobRepo {
    pool: PgPool,
}

impl PostgresJobRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepo {
    async fn create(&self, job: &Job) -> Result<Job, AppError> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (id, job_type, payload, execute_at, status, error_message, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
            .bind(&job.id)
            .bind(&job.job_type)
            .bind(&job.payload)
            .bind(job.execute_at)
            .bind(&job.status)
            .bind(&job.error_message)
            .bind(job.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_pending(&self, limit: i32) -> Result<Vec<Job>, AppError> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE status = 'PENDING' AND execute_at <= $1 ORDER BY execute_at ASC LIMIT $2",
        )
            .bind(Utc::now())
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: &str, error_message: Option<String>) -> Result<(), AppError> {
        sqlx::query("UPDATE jobs SET status = $1, error_message = $2 WHERE id = $3")
            .bind(status)
            .bind(error_message)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}

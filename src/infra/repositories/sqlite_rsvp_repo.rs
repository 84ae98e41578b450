use crate::domain::{models::rsvp::Rsvp, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteRsvpRepo {
    pool: SqlitePool,
}

impl SqliteRsvpRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepo {
    async fn create_counted(&self, rsvp: &Rsvp) -> Result<(Rsvp, i64), AppError> {
        // Insert and count share one transaction so the milestone check
        // never sees a stale total.
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Rsvp>(
            "INSERT INTO rsvps (id, invitation_id, guest_name, guest_email, guest_phone, status, guest_count, dietary_requirements, special_requests, message, responded_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&rsvp.id)
            .bind(&rsvp.invitation_id)
            .bind(&rsvp.guest_name)
            .bind(&rsvp.guest_email)
            .bind(&rsvp.guest_phone)
            .bind(&rsvp.status)
            .bind(rsvp.guest_count)
            .bind(&rsvp.dietary_requirements)
            .bind(&rsvp.special_requests)
            .bind(&rsvp.message)
            .bind(rsvp.responded_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let row = sqlx::query("SELECT COUNT(*) as count FROM rsvps WHERE invitation_id = ?")
            .bind(&rsvp.invitation_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        let total = row.get::<i64, _>("count");

        tx.commit().await.map_err(AppError::Database)?;
        Ok((created, total))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>("SELECT * FROM rsvps WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_guest(&self, invitation_id: &str, guest_email: &str) -> Result<Option<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "SELECT * FROM rsvps WHERE invitation_id = ? AND guest_email = ?",
        )
            .bind(invitation_id)
            .bind(guest_email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "UPDATE rsvps SET guest_name=?, guest_phone=?, status=?, guest_count=?, dietary_requirements=?, special_requests=?, message=?, responded_at=?
             WHERE id=?
             RETURNING *",
        )
            .bind(&rsvp.guest_name)
            .bind(&rsvp.guest_phone)
            .bind(&rsvp.status)
            .bind(rsvp.guest_count)
            .bind(&rsvp.dietary_requirements)
            .bind(&rsvp.special_requests)
            .bind(&rsvp.message)
            .bind(rsvp.responded_at)
            .bind(&rsvp.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_invitation(&self, invitation_id: &str) -> Result<Vec<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "SELECT * FROM rsvps WHERE invitation_id = ? ORDER BY responded_at ASC",
        )
            .bind(invitation_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

use crate::domain::{models::invitation::Invitation, ports::InvitationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresInvitationRepo {
    pool: PgPool,
}

impl PostgresInvitationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (id, user_id, code, title, description, event_type, event_date, event_time, venue_name, venue_address, host_name, host_email, host_phone, template_id, color_scheme, custom_message, is_public, max_guests, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
             RETURNING *",
        )
            .bind(&invitation.id)
            .bind(&invitation.user_id)
            .bind(&invitation.code)
            .bind(&invitation.title)
            .bind(&invitation.description)
            .bind(&invitation.event_type)
            .bind(invitation.event_date)
            .bind(&invitation.event_time)
            .bind(&invitation.venue_name)
            .bind(&invitation.venue_address)
            .bind(&invitation.host_name)
            .bind(&invitation.host_email)
            .bind(&invitation.host_phone)
            .bind(&invitation.template_id)
            .bind(&invitation.color_scheme)
            .bind(&invitation.custom_message)
            .bind(invitation.is_public)
            .bind(invitation.max_guests)
            .bind(invitation.created_at)
            .bind(invitation.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM invitations WHERE code = $1")
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count") > 0)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>("SELECT * FROM invitations WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>("SELECT * FROM invitations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE user_id = $1 ORDER BY created_at DESC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            "UPDATE invitations SET title=$1, description=$2, event_type=$3, event_date=$4, event_time=$5, venue_name=$6, venue_address=$7, host_name=$8, host_email=$9, host_phone=$10, template_id=$11, color_scheme=$12, custom_message=$13, is_public=$14, max_guests=$15, updated_at=$16
             WHERE id=$17 AND user_id=$18
             RETURNING *",
        )
            .bind(&invitation.title)
            .bind(&invitation.description)
            .bind(&invitation.event_type)
            .bind(invitation.event_date)
            .bind(&invitation.event_time)
            .bind(&invitation.venue_name)
            .bind(&invitation.venue_address)
            .bind(&invitation.host_name)
            .bind(&invitation.host_email)
            .bind(&invitation.host_phone)
            .bind(&invitation.template_id)
            .bind(&invitation.color_scheme)
            .bind(&invitation.custom_message)
            .bind(invitation.is_public)
            .bind(invitation.max_guests)
            .bind(invitation.updated_at)
            .bind(&invitation.id)
            .bind(&invitation.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM invitations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Invitation not found".into()));
        }
        Ok(())
    }
}

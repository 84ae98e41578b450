use crate::domain::{models::subscription::Subscription, ports::SubscriptionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSubscriptionRepo {
    pool: PgPool,
}

impl PostgresSubscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepo {
    async fn create(&self, subscription: &Subscription) -> Result<Subscription, AppError> {
        sqlx::query_as::<_, Subscription>(
            "INSERT INTO subscriptions (id, user_id, name, category, cost, cadence, start_date, next_charge_date, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
            .bind(&subscription.id)
            .bind(&subscription.user_id)
            .bind(&subscription.name)
            .bind(&subscription.category)
            .bind(subscription.cost)
            .bind(&subscription.cadence)
            .bind(subscription.start_date)
            .bind(subscription.next_charge_date)
            .bind(&subscription.status)
            .bind(subscription.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Subscription>, AppError> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE user_id = $1 AND id = $2",
        )
            .bind(user_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Subscription>, AppError> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE user_id = $1 ORDER BY created_at ASC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, subscription: &Subscription) -> Result<Subscription, AppError> {
        sqlx::query_as::<_, Subscription>(
            "UPDATE subscriptions SET name=$1, category=$2, cost=$3, next_charge_date=$4, status=$5
             WHERE id=$6 AND user_id=$7
             RETURNING *",
        )
            .bind(&subscription.name)
            .bind(&subscription.category)
            .bind(subscription.cost)
            .bind(subscription.next_charge_date)
            .bind(&subscription.status)
            .bind(&subscription.id)
            .bind(&subscription.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Subscription not found".into()));
        }
        Ok(())
    }
}

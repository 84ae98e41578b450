use crate::domain::models::{
    auth::RefreshTokenRecord, invitation::Invitation, job::Job, rsvp::Rsvp,
    subscription::Subscription, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn update_preferences(&self, id: &str, email_new_rsvp: bool, email_milestones: bool) -> Result<User, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Invitation>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Invitation>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Invitation>, AppError>;
    async fn update(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Inserts the response and returns it together with the invitation's
    /// post-insert RSVP total, read within the same transaction.
    async fn create_counted(&self, rsvp: &Rsvp) -> Result<(Rsvp, i64), AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Rsvp>, AppError>;
    async fn find_by_guest(&self, invitation_id: &str, guest_email: &str) -> Result<Option<Rsvp>, AppError>;
    async fn update(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError>;
    async fn list_by_invitation(&self, invitation_id: &str) -> Result<Vec<Rsvp>, AppError>;
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn create(&self, subscription: &Subscription) -> Result<Subscription, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Subscription>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Subscription>, AppError>;
    async fn update(&self, subscription: &Subscription) -> Result<Subscription, AppError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<Job, AppError>;
    async fn find_pending(&self, limit: i32) -> Result<Vec<Job>, AppError>;
    async fn update_status(&self, id: &str, status: &str, error_message: Option<String>) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}

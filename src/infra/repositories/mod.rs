pub mod sqlite_user_repo;
pub mod sqlite_invitation_repo;
pub mod sqlite_rsvp_repo;
pub mod sqlite_subscription_repo;
pub mod sqlite_job_repo;
pub mod sqlite_auth_repo;

pub mod postgres_user_repo;
pub mod postgres_invitation_repo;
pub mod postgres_rsvp_repo;
pub mod postgres_subscription_repo;
pub mod postgres_job_repo;
pub mod postgres_auth_repo;

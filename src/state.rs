use std::sync::Arc;
use crate::domain::ports::{
    AuthRepository, EmailService, InvitationRepository, JobRepository,
    RsvpRepository, SubscriptionRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::rsvp_service::RsvpService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub invitation_repo: Arc<dyn InvitationRepository>,
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub job_repo: Arc<dyn JobRepository>,
    pub auth_service: Arc<AuthService>,
    pub rsvp_service: Arc<RsvpService>,
    pub email_service: Arc<dyn EmailService>,
    pub templates: Arc<Tera>,
}

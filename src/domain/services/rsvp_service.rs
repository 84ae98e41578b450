use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::models::{
    invitation::Invitation,
    job::{Job, JobPayload, JOB_GUEST_CONFIRMATION, JOB_HOST_ALERT, JOB_MILESTONE},
    rsvp::{self, NewRsvpParams, Rsvp},
    user::User,
};
use crate::domain::ports::{JobRepository, RsvpRepository};
use crate::domain::services::milestones::milestone_reached;
use crate::error::AppError;

pub struct RsvpSubmission {
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub status: String,
    pub guest_count: i32,
    pub dietary_requirements: Option<String>,
    pub special_requests: Option<String>,
    pub message: Option<String>,
}

pub struct RsvpService {
    rsvp_repo: Arc<dyn RsvpRepository>,
    job_repo: Arc<dyn JobRepository>,
    milestones: Vec<i64>,
}

impl RsvpService {
    pub fn new(
        rsvp_repo: Arc<dyn RsvpRepository>,
        job_repo: Arc<dyn JobRepository>,
        milestones: Vec<i64>,
    ) -> Self {
        Self { rsvp_repo, job_repo, milestones }
    }

    /// Decides CREATE vs UPDATE for an incoming guest response.
    ///
    /// A response carrying a non-empty email updates the guest's earlier
    /// response to the same invitation in place; everything else inserts a
    /// fresh row. Only a CREATE changes the response total, so only a
    /// CREATE can hit a milestone.
    pub async fn submit(
        &self,
        invitation: &Invitation,
        host: &User,
        submission: RsvpSubmission,
    ) -> Result<Rsvp, AppError> {
        rsvp::validate_status(&submission.status)?;

        // An empty email field means no identity: never matched for update.
        let guest_email = submission.guest_email.clone().filter(|e| !e.is_empty());

        if let Some(email) = guest_email.as_deref()
            && let Some(existing) = self.rsvp_repo.find_by_guest(&invitation.id, email).await?
        {
            return self.overwrite(existing, submission).await;
        }

        let candidate = Rsvp::new(NewRsvpParams {
            invitation_id: invitation.id.clone(),
            guest_name: submission.guest_name.clone(),
            guest_email: guest_email.clone(),
            guest_phone: submission.guest_phone.clone(),
            status: submission.status.clone(),
            guest_count: submission.guest_count,
            dietary_requirements: submission.dietary_requirements.clone(),
            special_requests: submission.special_requests.clone(),
            message: submission.message.clone(),
        });

        let (created, total) = match self.rsvp_repo.create_counted(&candidate).await {
            Ok(pair) => pair,
            // Lost a same-identity race: the row now exists, so redo as update.
            Err(e) if e.is_unique_violation() => {
                let Some(email) = guest_email.as_deref() else {
                    return Err(e);
                };
                let existing = self
                    .rsvp_repo
                    .find_by_guest(&invitation.id, email)
                    .await?
                    .ok_or(AppError::Conflict("RSVP submission conflict".into()))?;
                return self.overwrite(existing, submission).await;
            }
            Err(e) => return Err(e),
        };

        info!("RSVP recorded for invitation {} (total now {})", invitation.code, total);

        self.enqueue_notifications(invitation, host, &created, total).await;

        Ok(created)
    }

    async fn overwrite(&self, mut existing: Rsvp, submission: RsvpSubmission) -> Result<Rsvp, AppError> {
        existing.guest_name = submission.guest_name;
        existing.guest_phone = submission.guest_phone;
        existing.status = submission.status;
        existing.guest_count = submission.guest_count;
        existing.dietary_requirements = submission.dietary_requirements;
        existing.special_requests = submission.special_requests;
        existing.message = submission.message;
        existing.responded_at = Utc::now();

        self.rsvp_repo.update(&existing).await
    }

    // Notification delivery is best-effort: a failed enqueue is logged and
    // swallowed, never propagated to the caller whose write already landed.
    async fn enqueue_notifications(
        &self,
        invitation: &Invitation,
        host: &User,
        created: &Rsvp,
        total: i64,
    ) {
        let now = Utc::now();

        if created.guest_email.is_some() {
            let job = Job::new(
                JOB_GUEST_CONFIRMATION,
                JobPayload {
                    invitation_id: invitation.id.clone(),
                    rsvp_id: Some(created.id.clone()),
                    milestone: None,
                },
                now,
            );
            if let Err(e) = self.job_repo.create(&job).await {
                warn!("Failed to enqueue guest confirmation: {:?}", e);
            }
        }

        if host.email_new_rsvp {
            let job = Job::new(
                JOB_HOST_ALERT,
                JobPayload {
                    invitation_id: invitation.id.clone(),
                    rsvp_id: Some(created.id.clone()),
                    milestone: None,
                },
                now,
            );
            if let Err(e) = self.job_repo.create(&job).await {
                warn!("Failed to enqueue host alert: {:?}", e);
            }
        }

        if host.email_milestones
            && let Some(threshold) = milestone_reached(&self.milestones, total)
        {
            info!("Invitation {} reached {} RSVPs", invitation.code, threshold);
            let job = Job::new(
                JOB_MILESTONE,
                JobPayload {
                    invitation_id: invitation.id.clone(),
                    rsvp_id: None,
                    milestone: Some(threshold),
                },
                now,
            );
            if let Err(e) = self.job_repo.create(&job).await {
                warn!("Failed to enqueue milestone notice: {:?}", e);
            }
        }
    }
}

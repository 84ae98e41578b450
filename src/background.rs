use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use tera::Context;

use crate::domain::models::job::{Job, JOB_GUEST_CONFIRMATION, JOB_HOST_ALERT, JOB_MILESTONE};
use crate::error::AppError;
use crate::state::AppState;

pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting notification job worker...");

    loop {
        match state.job_repo.find_pending(10).await {
            Ok(jobs) => {
                for job in jobs {
                    let job_id = job.id.clone();
                    let job_type = job.job_type.clone();

                    let span = info_span!(
                        "notification_job",
                        job_id = %job_id,
                        job_type = %job_type,
                    );

                    let state = state.clone();

                    async move {
                        info!("Processing job: {}", job_type);
                        match process_job(&state, &job).await {
                            Ok(_) => {
                                info!("Job completed successfully");
                                if let Err(e) = state.job_repo.update_status(&job.id, "COMPLETED", None).await {
                                    error!("Failed to mark job as completed: {:?}", e);
                                }
                            },
                            Err(e) => {
                                // A failed notification only fails the job
                                // row; the write that queued it already
                                // committed.
                                let err_msg = format!("{}", e);
                                error!("Job failed with error: {}", err_msg);
                                if let Err(up_err) = state.job_repo.update_status(&job.id, "FAILED", Some(err_msg)).await {
                                    error!("Failed to mark job as failed: {:?}", up_err);
                                }
                            }
                        }
                    }
                        .instrument(span)
                        .await;
                }
            }
            Err(e) => error!("Failed to fetch pending jobs: {:?}", e),
        }
        sleep(Duration::from_secs(5)).await;
    }
}

async fn process_job(state: &Arc<AppState>, job: &Job) -> Result<(), AppError> {
    let invitation_id = &job.payload.invitation_id;

    let invitation = state.invitation_repo.find_by_id(invitation_id).await?
        .ok_or(AppError::NotFound(format!("Invitation {} not found", invitation_id)))?;

    let host = state.user_repo.find_by_id(&invitation.user_id).await?
        .ok_or(AppError::NotFound(format!("User {} not found", invitation.user_id)))?;

    let share_url = invitation.share_url(&state.config.frontend_url);

    match job.job_type.as_str() {
        JOB_GUEST_CONFIRMATION => {
            let rsvp_id = job.payload.rsvp_id.as_deref()
                .ok_or(AppError::InternalWithMsg("Job payload missing rsvp_id".to_string()))?;
            let rsvp = state.rsvp_repo.find_by_id(rsvp_id).await?
                .ok_or(AppError::NotFound(format!("RSVP {} not found", rsvp_id)))?;
            let recipient = rsvp.guest_email.clone()
                .ok_or(AppError::InternalWithMsg("RSVP has no guest email".to_string()))?;

            let mut context = Context::new();
            context.insert("guest_name", &rsvp.guest_name);
            context.insert("title", &invitation.title);
            context.insert("event_date", &invitation.event_date.format("%A, %B %d, %Y").to_string());
            context.insert("event_time", invitation.event_time.as_deref().unwrap_or("TBA"));
            context.insert("venue_name", invitation.venue_name.as_deref().unwrap_or("TBA"));
            context.insert("share_url", &share_url);

            let body = state.templates.render("guest_confirmation.html", &context)
                .map_err(|e| AppError::InternalWithMsg(format!("Template render error: {:?}", e)))?;
            let subject = format!("RSVP Confirmed: {}", invitation.title);

            state.email_service.send(&recipient, &subject, &body).await
        }
        JOB_HOST_ALERT => {
            let rsvp_id = job.payload.rsvp_id.as_deref()
                .ok_or(AppError::InternalWithMsg("Job payload missing rsvp_id".to_string()))?;
            let rsvp = state.rsvp_repo.find_by_id(rsvp_id).await?
                .ok_or(AppError::NotFound(format!("RSVP {} not found", rsvp_id)))?;

            let mut context = Context::new();
            context.insert("host_name", &host.full_name);
            context.insert("guest_name", &rsvp.guest_name);
            context.insert("status", &rsvp.status);
            context.insert("guest_count", &rsvp.guest_count);
            context.insert("message", &rsvp.message);
            context.insert("share_url", &share_url);

            let body = state.templates.render("host_alert.html", &context)
                .map_err(|e| AppError::InternalWithMsg(format!("Template render error: {:?}", e)))?;
            let subject = format!("New RSVP: {} for {}", rsvp.guest_name, invitation.title);

            state.email_service.send(&host.email, &subject, &body).await
        }
        JOB_MILESTONE => {
            let milestone = job.payload.milestone
                .ok_or(AppError::InternalWithMsg("Job payload missing milestone".to_string()))?;

            let mut context = Context::new();
            context.insert("host_name", &host.full_name);
            context.insert("title", &invitation.title);
            context.insert("milestone", &milestone);
            context.insert("share_url", &share_url);

            let body = state.templates.render("milestone.html", &context)
                .map_err(|e| AppError::InternalWithMsg(format!("Template render error: {:?}", e)))?;
            let subject = format!("🎉 Milestone Reached: {} RSVPs for {}!", milestone, invitation.title);

            state.email_service.send(&host.email, &subject, &body).await
        }
        other => Err(AppError::InternalWithMsg(format!("Unknown job type {}", other))),
    }
}

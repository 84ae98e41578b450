pub mod auth_service;
pub mod billing;
pub mod gallery;
pub mod invite_codes;
pub mod milestones;
pub mod rsvp_service;

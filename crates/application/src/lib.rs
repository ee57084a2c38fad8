//! Application services and ports.

#![forbid(unsafe_code)]

mod user_moderation_ports;
mod user_moderation_service;

pub use user_moderation_ports::{ActionResult, UserListing, UserModerationRepository};
pub use user_moderation_service::UserModerationService;

//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod moderation;
mod user;

pub use moderation::ModerationAction;
pub use user::{ApprovalStatus, Role, User, UserId};

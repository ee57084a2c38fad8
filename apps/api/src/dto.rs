mod common;
mod moderation;

pub use common::{HealthDependencyStatus, HealthResponse};
pub use moderation::{ActionResultResponse, AdminPageResponse, UserIdForm};

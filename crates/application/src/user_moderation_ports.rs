use async_trait::async_trait;

use gatehouse_core::AppResult;
use gatehouse_domain::{ApprovalStatus, User, UserId};

/// Repository port for the user store backing the moderation page.
#[async_trait]
pub trait UserModerationRepository: Send + Sync {
    /// Lists users in the given approval state with their role loaded.
    async fn list_users_by_status(&self, status: ApprovalStatus) -> AppResult<Vec<User>>;

    /// Marks a user as approved.
    ///
    /// Returns `AppError::NotFound` when no user has the given id.
    async fn approve_user(&self, user_id: &UserId) -> AppResult<()>;

    /// Deletes a user record outright.
    ///
    /// Returns `AppError::NotFound` when no user has the given id.
    async fn delete_user(&self, user_id: &UserId) -> AppResult<()>;
}

/// Users split by approval state for page rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListing {
    /// Users awaiting approval.
    pub pending_users: Vec<User>,
    /// Users with granted access.
    pub approved_users: Vec<User>,
}

/// Outcome of a moderation form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Whether the write went through.
    pub success: bool,
    /// Generic failure message shown on the page.
    pub error: Option<String>,
}

impl ActionResult {
    /// Successful outcome.
    #[must_use]
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Failed outcome carrying a user-facing message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

//! Moderation of pending and approved accounts.
//!
//! The read path returns store errors to the caller. The write paths never
//! fail: any store error is logged and folded into an [`ActionResult`] with a
//! generic per-action message.

use std::sync::Arc;

use tracing::{error, info};

use gatehouse_core::AppResult;
use gatehouse_domain::{ApprovalStatus, ModerationAction, UserId};

use crate::user_moderation_ports::{ActionResult, UserListing, UserModerationRepository};

/// Application service behind the user moderation page.
#[derive(Clone)]
pub struct UserModerationService {
    repository: Arc<dyn UserModerationRepository>,
}

impl UserModerationService {
    /// Creates a new service from the injected user store.
    #[must_use]
    pub fn new(repository: Arc<dyn UserModerationRepository>) -> Self {
        Self { repository }
    }

    /// Returns pending and approved users, each with their role.
    pub async fn list_users(&self) -> AppResult<UserListing> {
        let pending_users = self
            .repository
            .list_users_by_status(ApprovalStatus::Pending)
            .await?;
        let approved_users = self
            .repository
            .list_users_by_status(ApprovalStatus::Approved)
            .await?;

        Ok(UserListing {
            pending_users,
            approved_users,
        })
    }

    /// Approves a pending user.
    pub async fn approve(&self, user_id: &UserId) -> ActionResult {
        self.run_action(ModerationAction::Approve, user_id).await
    }

    /// Deletes a pending applicant.
    pub async fn decline(&self, user_id: &UserId) -> ActionResult {
        self.run_action(ModerationAction::Decline, user_id).await
    }

    /// Deletes an approved user.
    pub async fn delete_approved(&self, user_id: &UserId) -> ActionResult {
        self.run_action(ModerationAction::DeleteApproved, user_id)
            .await
    }

    /// Runs one form action against the user store.
    ///
    /// Decline and delete-approved both delete unconditionally; the current
    /// approval state of the record is not checked.
    pub async fn run_action(&self, action: ModerationAction, user_id: &UserId) -> ActionResult {
        let outcome = match action {
            ModerationAction::Approve => self.repository.approve_user(user_id).await,
            ModerationAction::Decline | ModerationAction::DeleteApproved => {
                self.repository.delete_user(user_id).await
            }
        };

        match outcome {
            Ok(()) => {
                info!(action = action.as_str(), %user_id, "moderation action applied");
                ActionResult::success()
            }
            Err(app_error) => {
                error!(
                    action = action.as_str(),
                    %user_id,
                    error = %app_error,
                    "error {}",
                    action.log_label()
                );
                ActionResult::failure(action.failure_message())
            }
        }
    }
}

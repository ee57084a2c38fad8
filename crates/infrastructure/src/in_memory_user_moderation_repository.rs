use std::collections::HashMap;

use async_trait::async_trait;
use gatehouse_application::UserModerationRepository;
use gatehouse_core::{AppError, AppResult};
use gatehouse_domain::{ApprovalStatus, User, UserId};
use tokio::sync::RwLock;

/// In-memory user store implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserModerationRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserModerationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a repository pre-populated with users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(
                users
                    .into_iter()
                    .map(|user| (user.id().clone(), user))
                    .collect(),
            ),
        }
    }

    /// Inserts or replaces a user record.
    pub async fn insert_user(&self, user: User) {
        self.users.write().await.insert(user.id().clone(), user);
    }
}

#[async_trait]
impl UserModerationRepository for InMemoryUserModerationRepository {
    async fn list_users_by_status(&self, status: ApprovalStatus) -> AppResult<Vec<User>> {
        let users = self.users.read().await;

        let mut values: Vec<User> = users
            .values()
            .filter(|user| user.status() == status)
            .cloned()
            .collect();
        values.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.id().as_str().cmp(right.id().as_str()))
        });

        Ok(values)
    }

    async fn approve_user(&self, user_id: &UserId) -> AppResult<()> {
        let mut users = self.users.write().await;
        let Some(user) = users.remove(user_id) else {
            return Err(AppError::NotFound(format!(
                "user '{user_id}' does not exist"
            )));
        };

        users.insert(user_id.clone(), user.approved());
        Ok(())
    }

    async fn delete_user(&self, user_id: &UserId) -> AppResult<()> {
        self.users
            .write()
            .await
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))
    }
}

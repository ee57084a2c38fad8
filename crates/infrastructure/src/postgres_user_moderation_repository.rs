//! PostgreSQL-backed user store for moderation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use gatehouse_application::UserModerationRepository;
use gatehouse_core::{AppError, AppResult};
use gatehouse_domain::{ApprovalStatus, Role, User, UserId};

/// PostgreSQL implementation of the user moderation repository port.
#[derive(Clone)]
pub struct PostgresUserModerationRepository {
    pool: PgPool,
}

impl PostgresUserModerationRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserWithRoleRow {
    id: String,
    email: String,
    display_name: String,
    is_approved: bool,
    created_at: DateTime<Utc>,
    role_id: String,
    role_name: String,
}

impl UserWithRoleRow {
    fn into_user(self) -> AppResult<User> {
        let user_id = UserId::new(self.id).map_err(|error| {
            AppError::Internal(format!("stored user row has an invalid id: {error}"))
        })?;

        Ok(User::new(
            user_id,
            self.email,
            self.display_name,
            ApprovalStatus::from_is_approved(self.is_approved),
            Role::new(self.role_id, self.role_name),
            self.created_at,
        ))
    }
}

#[async_trait]
impl UserModerationRepository for PostgresUserModerationRepository {
    async fn list_users_by_status(&self, status: ApprovalStatus) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserWithRoleRow>(
            r#"
            SELECT
                users.id,
                users.email,
                users.display_name,
                users.is_approved,
                users.created_at,
                roles.id AS role_id,
                roles.name AS role_name
            FROM users
            INNER JOIN roles ON roles.id = users.role_id
            WHERE users.is_approved = $1
            ORDER BY users.created_at, users.id
            "#,
        )
        .bind(status.is_approved())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list {} users: {error}",
                status.as_str()
            ))
        })?;

        rows.into_iter().map(UserWithRoleRow::into_user).collect()
    }

    async fn approve_user(&self, user_id: &UserId) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET is_approved = TRUE, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to approve user: {error}")))?;

        ensure_row_affected(result.rows_affected(), user_id)
    }

    async fn delete_user(&self, user_id: &UserId) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete user: {error}")))?;

        ensure_row_affected(result.rows_affected(), user_id)
    }
}

fn ensure_row_affected(rows_affected: u64, user_id: &UserId) -> AppResult<()> {
    if rows_affected == 0 {
        debug!(%user_id, "no user row matched");
        return Err(AppError::NotFound(format!(
            "user '{user_id}' does not exist"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests;

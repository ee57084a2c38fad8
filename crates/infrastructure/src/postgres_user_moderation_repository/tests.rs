use gatehouse_application::UserModerationRepository;
use gatehouse_core::AppError;
use gatehouse_domain::{ApprovalStatus, UserId};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresUserModerationRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres user moderation tests: {error}");
    }

    Some(pool)
}

async fn insert_user(pool: &PgPool, is_approved: bool) -> UserId {
    let id = format!("user-{}", uuid::Uuid::new_v4());
    let insert = sqlx::query(
        r#"
            INSERT INTO users (id, email, display_name, is_approved, role_id)
            VALUES ($1, $2, $3, $4, 'role-member')
            "#,
    )
    .bind(id.as_str())
    .bind(format!("{id}@example.com"))
    .bind("Test User")
    .bind(is_approved)
    .execute(pool)
    .await;
    assert!(insert.is_ok());

    UserId::new(id).unwrap_or_else(|_| panic!("generated id must be valid"))
}

fn contains(users: &[gatehouse_domain::User], user_id: &UserId) -> bool {
    users.iter().any(|user| user.id() == user_id)
}

#[tokio::test]
async fn listing_splits_users_and_loads_roles() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserModerationRepository::new(pool.clone());
    let pending_id = insert_user(&pool, false).await;
    let approved_id = insert_user(&pool, true).await;

    let pending = repository
        .list_users_by_status(ApprovalStatus::Pending)
        .await
        .unwrap_or_default();
    let approved = repository
        .list_users_by_status(ApprovalStatus::Approved)
        .await
        .unwrap_or_default();

    assert!(contains(&pending, &pending_id));
    assert!(!contains(&approved, &pending_id));
    assert!(contains(&approved, &approved_id));
    assert!(!contains(&pending, &approved_id));
    assert!(
        pending
            .iter()
            .filter(|user| user.id() == &pending_id)
            .all(|user| user.role().name() == "member")
    );
}

#[tokio::test]
async fn approve_is_idempotent_and_rejects_unknown_ids() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserModerationRepository::new(pool.clone());
    let user_id = insert_user(&pool, false).await;

    assert!(repository.approve_user(&user_id).await.is_ok());
    assert!(repository.approve_user(&user_id).await.is_ok());

    let approved = repository
        .list_users_by_status(ApprovalStatus::Approved)
        .await
        .unwrap_or_default();
    assert!(contains(&approved, &user_id));

    let missing = UserId::new(format!("missing-{}", uuid::Uuid::new_v4()))
        .unwrap_or_else(|_| panic!("generated id must be valid"));
    let result = repository.approve_user(&missing).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_user_regardless_of_status() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserModerationRepository::new(pool.clone());
    let pending_id = insert_user(&pool, false).await;
    let approved_id = insert_user(&pool, true).await;

    assert!(repository.delete_user(&pending_id).await.is_ok());
    assert!(repository.delete_user(&approved_id).await.is_ok());

    for status in [ApprovalStatus::Pending, ApprovalStatus::Approved] {
        let users = repository
            .list_users_by_status(status)
            .await
            .unwrap_or_default();
        assert!(!contains(&users, &pending_id));
        assert!(!contains(&users, &approved_id));
    }

    let second_delete = repository.delete_user(&pending_id).await;
    assert!(matches!(second_delete, Err(AppError::NotFound(_))));
}

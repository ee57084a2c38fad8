use std::sync::Arc;

use gatehouse_application::UserModerationService;
use gatehouse_core::AppError;
use gatehouse_infrastructure::PostgresUserModerationRepository;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub async fn connect_and_migrate(config: &ApiConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    Ok(pool)
}

pub fn build_app_state(pool: PgPool, config: &ApiConfig) -> AppState {
    let user_moderation_repository = Arc::new(PostgresUserModerationRepository::new(pool.clone()));

    AppState {
        user_moderation_service: UserModerationService::new(user_moderation_repository),
        postgres_pool: pool,
        frontend_url: config.frontend_url.clone(),
    }
}

use gatehouse_application::UserModerationService;
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_moderation_service: UserModerationService,
    pub postgres_pool: PgPool,
    pub frontend_url: String,
}

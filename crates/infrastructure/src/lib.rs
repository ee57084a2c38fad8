//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_user_moderation_repository;
mod postgres_user_moderation_repository;

pub use in_memory_user_moderation_repository::InMemoryUserModerationRepository;
pub use postgres_user_moderation_repository::PostgresUserModerationRepository;

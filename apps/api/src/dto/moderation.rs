use chrono::SecondsFormat;
use gatehouse_application::{ActionResult, UserListing};
use gatehouse_core::{AppError, AppResult};
use gatehouse_domain::{Role, User, UserId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Form body submitted by every moderation action.
#[derive(Debug, Default, Deserialize)]
pub struct UserIdForm {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl UserIdForm {
    /// Validates the submitted `userId` field into a typed identifier.
    pub fn validate(self) -> AppResult<UserId> {
        let Some(value) = self.user_id else {
            return Err(AppError::Validation("userId is required".to_owned()));
        };

        UserId::new(value).map_err(|_| AppError::Validation("userId is required".to_owned()))
    }
}

/// API representation of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
}

/// API representation of a moderated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub is_approved: bool,
    pub role: RoleResponse,
    pub created_at: String,
}

/// Data loaded for the admin page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/admin-page-response.ts"
)]
pub struct AdminPageResponse {
    pub pending_users: Vec<UserResponse>,
    pub approved_users: Vec<UserResponse>,
}

/// Result of a moderation form action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/action-result-response.ts"
)]
pub struct ActionResultResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl From<&Role> for RoleResponse {
    fn from(value: &Role) -> Self {
        Self {
            id: value.id().to_owned(),
            name: value.name().to_owned(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().as_str().to_owned(),
            email: value.email().to_owned(),
            display_name: value.display_name().to_owned(),
            is_approved: value.is_approved(),
            role: RoleResponse::from(value.role()),
            created_at: value
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl From<UserListing> for AdminPageResponse {
    fn from(value: UserListing) -> Self {
        Self {
            pending_users: value
                .pending_users
                .into_iter()
                .map(UserResponse::from)
                .collect(),
            approved_users: value
                .approved_users
                .into_iter()
                .map(UserResponse::from)
                .collect(),
        }
    }
}

impl From<ActionResult> for ActionResultResponse {
    fn from(value: ActionResult) -> Self {
        Self {
            success: value.success,
            error: value.error,
        }
    }
}

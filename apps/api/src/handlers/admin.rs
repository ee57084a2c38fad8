use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;

use gatehouse_core::AppError;
use gatehouse_domain::ModerationAction;

use crate::dto::{ActionResultResponse, AdminPageResponse, UserIdForm};
use crate::error::ApiResult;
use crate::state::AppState;

/// Loads pending and approved users for the admin page.
pub async fn load_admin_page_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<AdminPageResponse>> {
    let listing = state.user_moderation_service.list_users().await?;

    Ok(Json(AdminPageResponse::from(listing)))
}

/// Runs one named form action (`approve`, `decline` or `deleteApproved`).
///
/// Store failures are reported as a failed action result with status 200.
/// A missing or blank `userId` is answered with status 400.
pub async fn moderation_action_handler(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Form(form): Form<UserIdForm>,
) -> ApiResult<(StatusCode, Json<ActionResultResponse>)> {
    let action = ModerationAction::parse(action.as_str())
        .map_err(|_| AppError::NotFound(format!("form action '{action}' does not exist")))?;

    let user_id = match form.validate() {
        Ok(user_id) => user_id,
        Err(AppError::Validation(message)) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(ActionResultResponse {
                    success: false,
                    error: Some(message),
                }),
            ));
        }
        Err(other) => return Err(other.into()),
    };

    let result = state
        .user_moderation_service
        .run_action(action, &user_id)
        .await;

    Ok((StatusCode::OK, Json(ActionResultResponse::from(result))))
}

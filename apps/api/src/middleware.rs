use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::Response;
use gatehouse_core::AppError;
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;

/// Rejects state-changing requests that do not originate from the frontend.
pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method())
        && !is_same_origin(request.headers(), state.frontend_url.as_str())
    {
        warn!(uri = %request.uri(), "blocked cross-origin form submission");
        return Err(AppError::Forbidden("origin validation failed".to_owned()).into());
    }

    Ok(next.run(request).await)
}

fn is_same_origin(headers: &HeaderMap, allowed_origin: &str) -> bool {
    if let Some(fetch_site) = headers.get("sec-fetch-site")
        && fetch_site == HeaderValue::from_static("cross-site")
    {
        return false;
    }

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    origin == allowed_origin || referer_matches_origin(referer, allowed_origin)
}

/// A referer matches when its scheme, host and port equal the allowed origin.
fn referer_matches_origin(referer: &str, allowed_origin: &str) -> bool {
    let allowed_origin = allowed_origin.trim_end_matches('/');
    if allowed_origin.is_empty() {
        return false;
    }

    match referer.strip_prefix(allowed_origin) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

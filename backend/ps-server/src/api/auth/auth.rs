//! Account registration and session handlers

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::login_response::LoginResponse;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::auth::register_response::RegisterResponse;
use crate::api::auth::user_dto::UserDto;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::session::CurrentSession;
use crate::session::SessionContext;
use crate::state::AppState;

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// POST /api/v1/auth/register
///
/// Creates an account. Does not log the user in; the client follows up
/// with a login call.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    if request.password != request.confirm_password {
        return Err(ApiError::validation(
            "Passwords do not match",
            Some("confirm_password"),
        ));
    }

    let user = state
        .credentials
        .register(&request.email, &request.password)
        .await?;

    info!("Account registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserDto::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state
        .credentials
        .authenticate(&request.email, &request.password)
        .await?;

    let token = state.sessions.create(SessionContext::for_user(&user)).await;

    info!("User logged in: {}", user.id);

    Ok(Json(LoginResponse {
        token: token.to_string(),
        user: UserDto::from(&user),
    }))
}

/// POST /api/v1/auth/logout
///
/// Removes the session context, which also discards the held document
/// reference and any displayed result.
pub async fn logout(
    State(state): State<AppState>,
    session: CurrentSession,
) -> ApiResult<StatusCode> {
    state.sessions.remove(session.token).await;

    info!("User logged out: {}", session.context.user_id);

    Ok(StatusCode::NO_CONTENT)
}

//! Axum extractor for bearer-token sessions

use crate::api::error::ApiError;
use crate::session::SessionContext;
use crate::state::AppState;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// The live session for the request's `Authorization: Bearer <token>` header.
///
/// Carries the token alongside the context so handlers can write updates
/// back through the registry.
pub struct CurrentSession {
    pub token: Uuid,
    pub context: SessionContext,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(parts)
                .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

            let context = state
                .sessions
                .get(token)
                .await
                .ok_or_else(|| ApiError::unauthorized("Session expired or logged out"))?;

            Ok(CurrentSession { token, context })
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<Uuid> {
    let header = parts.headers.get("Authorization")?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}
